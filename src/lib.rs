//! # Log Druid
//!
//! Colored, banner-decorated console logging with optional caller
//! provenance.
//!
//! ## Features
//!
//! - **Per-level colors**: every record is wrapped in the ANSI color mapped
//!   to its level, with a replaceable color map
//! - **Banner blocks**: timestamp, level, app label, and logger name framed
//!   by a configurable separator pattern
//! - **Caller traces**: the last N callers (file, function, line) printed
//!   above the message
//! - **Named loggers**: a registry of loggers with thresholds and handlers

pub mod caller;
pub mod colored_logger;
pub mod core;
pub mod factory;
pub mod formatter;
pub mod handlers;
pub mod macros;
pub mod pattern;

pub mod prelude {
    pub use crate::caller::{BacktraceProvider, CallerContextProvider, CallerFrame, FixedProvider};
    pub use crate::colored_logger::{ColoredLogger, ColoredLoggerBuilder, ColoredLoggerConfig};
    pub use crate::core::{
        get_logger, FieldValue, Formatter, Handler, LogContext, LogEntry, LogFormat, LogLevel,
        Logger, LoggerError, LoggerMetrics, LoggerRegistry, Result, TimestampFormat,
    };
    pub use crate::factory::{LoggerFactory, LoggerOverrides};
    pub use crate::formatter::{ColorFormatter, ColorMap};
    pub use crate::handlers::{SharedBuffer, StreamHandler};
    pub use crate::pattern::PatternTemplate;
}

pub use caller::{BacktraceProvider, CallerContextProvider, CallerFrame, FixedProvider};
pub use colored_logger::{ColoredLogger, ColoredLoggerBuilder, ColoredLoggerConfig};
pub use core::{
    get_logger, FieldValue, Formatter, Handler, LogContext, LogEntry, LogFormat, LogLevel, Logger,
    LoggerError, LoggerMetrics, LoggerRegistry, Result, TimestampFormat,
};
pub use factory::{LoggerFactory, LoggerOverrides};
pub use formatter::{ColorFormatter, ColorMap};
pub use handlers::{SharedBuffer, StreamHandler};
pub use pattern::PatternTemplate;
