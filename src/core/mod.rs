//! The underlying logging facility: levels, records, handlers, named loggers

pub mod error;
pub mod handler;
pub mod log_context;
pub mod log_entry;
pub mod log_format;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod timestamp;

pub use error::{LoggerError, Result};
pub use handler::{Formatter, Handler};
pub use log_context::{FieldValue, LogContext};
pub use log_entry::LogEntry;
pub use log_format::LogFormat;
pub use log_level::LogLevel;
pub use logger::{get_logger, Logger, LoggerRegistry, DEFAULT_LEVEL, ROOT_LOGGER_NAME};
pub use metrics::LoggerMetrics;
pub use timestamp::TimestampFormat;
