//! Shared defaults for producing colored loggers

use crate::colored_logger::{ColoredLogger, ColoredLoggerBuilder};
use crate::core::{LogLevel, LoggerRegistry};
use std::sync::Arc;

/// Per-call settings that take precedence over a factory's defaults
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoggerOverrides {
    /// Banner label; `None` or an empty string keeps the factory default
    pub parent_name: Option<String>,
    /// `Some(false)` disables inspection even when the factory enables it
    pub inspect_mode: Option<bool>,
}

impl LoggerOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn parent_name(mut self, parent_name: impl Into<String>) -> Self {
        self.parent_name = Some(parent_name.into());
        self
    }

    #[must_use]
    pub fn inspect_mode(mut self, enabled: bool) -> Self {
        self.inspect_mode = Some(enabled);
        self
    }
}

/// Produces [`ColoredLogger`]s that share a threshold, an app label, and an
/// inspect-mode default.
///
/// # Example
///
/// ```
/// use log_druid::prelude::*;
///
/// let factory = LoggerFactory::new(Some(LogLevel::Debug), Some("shop".to_string()), true);
/// let api = factory.get_logger("api");
/// let jobs = factory.get_logger_with("jobs", LoggerOverrides::new().inspect_mode(false));
///
/// assert!(api.inspect_mode());
/// assert!(!jobs.inspect_mode());
/// ```
#[derive(Clone, Default)]
pub struct LoggerFactory {
    level: Option<LogLevel>,
    parent_name: Option<String>,
    inspect_mode: Option<bool>,
    registry: Option<Arc<LoggerRegistry>>,
}

impl LoggerFactory {
    pub fn new(level: Option<LogLevel>, parent_name: Option<String>, inspect_mode: bool) -> Self {
        Self {
            level,
            parent_name,
            inspect_mode: Some(inspect_mode),
            registry: None,
        }
    }

    /// Create loggers in `registry` instead of the process-wide one
    #[must_use]
    pub fn in_registry(mut self, registry: Arc<LoggerRegistry>) -> Self {
        self.registry = Some(registry);
        self
    }

    pub fn level(&self) -> Option<LogLevel> {
        self.level
    }

    pub fn parent_name(&self) -> Option<&str> {
        self.parent_name.as_deref()
    }

    /// Inspect-mode default; on unless configured otherwise
    pub fn inspect_mode(&self) -> bool {
        self.inspect_mode.unwrap_or(true)
    }

    pub fn get_logger(&self, name: &str) -> ColoredLogger {
        self.get_logger_with(name, LoggerOverrides::default())
    }

    pub fn get_logger_with(&self, name: &str, overrides: LoggerOverrides) -> ColoredLogger {
        let builder = self.builder_for(name, overrides);
        match &self.registry {
            Some(registry) => builder.build_in(registry),
            None => builder.build(),
        }
    }

    /// The builder `get_logger_with` would use, for further customization
    pub fn builder_for(&self, name: &str, overrides: LoggerOverrides) -> ColoredLoggerBuilder {
        let parent_name = overrides
            .parent_name
            .filter(|parent| !parent.is_empty())
            .or_else(|| self.parent_name.clone());
        let inspect_mode = overrides.inspect_mode.unwrap_or_else(|| self.inspect_mode());

        let mut builder = ColoredLogger::builder().name(name).inspect_mode(inspect_mode);
        if let Some(level) = self.level {
            builder = builder.level(level);
        }
        if let Some(parent_name) = parent_name {
            builder = builder.app_name(parent_name);
        }
        builder
    }
}

impl std::fmt::Debug for LoggerFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoggerFactory")
            .field("level", &self.level)
            .field("parent_name", &self.parent_name)
            .field("inspect_mode", &self.inspect_mode())
            .finish()
    }
}
