//! Named loggers and the process-wide logger registry

use super::{
    error::{LoggerError, Result},
    handler::Handler,
    log_context::LogContext,
    log_entry::LogEntry,
    log_level::LogLevel,
    metrics::LoggerMetrics,
};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

/// Name used when a logger is requested without one
pub const ROOT_LOGGER_NAME: &str = "root";

/// Threshold applied to loggers that have none of their own
pub const DEFAULT_LEVEL: LogLevel = LogLevel::Info;

/// A named logger dispatching records to its handlers synchronously.
///
/// Loggers are obtained from a [`LoggerRegistry`] and shared through `Arc`;
/// every mutating operation takes `&self`.
pub struct Logger {
    name: String,
    level: RwLock<Option<LogLevel>>,
    default_level: Arc<RwLock<LogLevel>>,
    handlers: RwLock<Vec<Box<dyn Handler>>>,
    metrics: LoggerMetrics,
}

impl Logger {
    fn new(name: String, default_level: Arc<RwLock<LogLevel>>) -> Self {
        Self {
            name,
            level: RwLock::new(None),
            default_level,
            handlers: RwLock::new(Vec::new()),
            metrics: LoggerMetrics::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set this logger's own threshold
    pub fn set_level(&self, level: LogLevel) {
        *self.level.write() = Some(level);
    }

    /// Drop this logger's own threshold so it follows the registry default again
    pub fn clear_level(&self) {
        *self.level.write() = None;
    }

    /// The logger's own threshold, if one was set
    pub fn level(&self) -> Option<LogLevel> {
        *self.level.read()
    }

    pub fn effective_level(&self) -> LogLevel {
        self.level().unwrap_or_else(|| *self.default_level.read())
    }

    #[inline]
    pub fn is_enabled_for(&self, level: LogLevel) -> bool {
        level >= self.effective_level()
    }

    /// Attach a handler. Attaching the same kind of handler twice emits twice.
    pub fn add_handler(&self, handler: Box<dyn Handler>) {
        self.handlers.write().push(handler);
    }

    /// Swap out the handler sharing `handler`'s name, or attach it if none does.
    ///
    /// Returns `true` when an existing handler was replaced.
    pub fn replace_handler(&self, handler: Box<dyn Handler>) -> bool {
        let mut handlers = self.handlers.write();
        match handlers.iter_mut().find(|h| h.name() == handler.name()) {
            Some(slot) => {
                *slot = handler;
                true
            }
            None => {
                handlers.push(handler);
                false
            }
        }
    }

    /// Detach every handler with the given name, returning how many were removed
    pub fn remove_handler(&self, name: &str) -> usize {
        let mut handlers = self.handlers.write();
        let before = handlers.len();
        handlers.retain(|h| h.name() != name);
        before - handlers.len()
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.read().len()
    }

    pub fn handler_names(&self) -> Vec<String> {
        self.handlers.read().iter().map(|h| h.name().to_string()).collect()
    }

    pub fn log(&self, level: LogLevel, message: impl Into<String>) {
        if !self.is_enabled_for(level) {
            return;
        }

        let entry = LogEntry::new(level, self.name.as_str(), message.into());
        self.dispatch(&entry);
    }

    /// Log with pass-through context fields
    pub fn log_with_context(&self, level: LogLevel, message: impl Into<String>, context: LogContext) {
        if !self.is_enabled_for(level) {
            return;
        }

        let entry = LogEntry::new(level, self.name.as_str(), message.into()).with_context(context);
        self.dispatch(&entry);
    }

    /// Hand a record to every handler under one write lock.
    ///
    /// **Per-handler isolation**: each handler runs inside `catch_unwind`, so
    /// one failing or panicking handler neither reaches the caller nor stops
    /// the remaining handlers.
    fn dispatch(&self, entry: &LogEntry) {
        let mut handlers = self.handlers.write();
        let mut has_error = false;

        for (idx, handler) in handlers.iter_mut().enumerate() {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                handler.handle(entry)
            }));

            match result {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    eprintln!("[LOGGER ERROR] Handler #{} ({}) failed: {}", idx, handler.name(), e);
                    has_error = true;
                }
                Err(panic_info) => {
                    let err = LoggerError::handler_panicked(handler.name(), panic_message(&*panic_info));
                    eprintln!(
                        "[LOGGER CRITICAL] {}. Other handlers continue to function.",
                        err
                    );
                    has_error = true;
                }
            }
        }

        if has_error {
            self.metrics.record_dropped();
        } else {
            self.metrics.record_logged();
        }
    }

    pub fn flush(&self) -> Result<()> {
        let mut handlers = self.handlers.write();
        for handler in handlers.iter_mut() {
            handler.flush()?;
        }
        Ok(())
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    pub fn warning(&self, message: impl Into<String>) {
        self.log(LogLevel::Warning, message);
    }

    #[inline]
    pub fn error(&self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    #[inline]
    pub fn critical(&self, message: impl Into<String>) {
        self.log(LogLevel::Critical, message);
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("level", &self.level())
            .field("handlers", &self.handler_names())
            .finish()
    }
}

fn panic_message(panic_info: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = panic_info.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic_info.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

/// Loggers looked up and cached by name.
///
/// The first [`get_logger`](LoggerRegistry::get_logger) call for a name
/// creates the logger; later calls return the same instance. Most code uses
/// the process-wide [`LoggerRegistry::global`] instance; tests and embedders
/// can keep their own.
///
/// # Example
///
/// ```
/// use log_druid::LoggerRegistry;
///
/// let registry = LoggerRegistry::new();
/// let a = registry.get_logger(Some("api"));
/// let b = registry.get_logger(Some("api"));
/// assert!(std::sync::Arc::ptr_eq(&a, &b));
/// ```
pub struct LoggerRegistry {
    loggers: RwLock<HashMap<String, Arc<Logger>>>,
    default_level: Arc<RwLock<LogLevel>>,
}

impl LoggerRegistry {
    pub fn new() -> Self {
        Self {
            loggers: RwLock::new(HashMap::new()),
            default_level: Arc::new(RwLock::new(DEFAULT_LEVEL)),
        }
    }

    /// The process-wide registry, created on first use
    pub fn global() -> &'static LoggerRegistry {
        static GLOBAL: OnceLock<LoggerRegistry> = OnceLock::new();
        GLOBAL.get_or_init(LoggerRegistry::new)
    }

    /// Fetch or create the logger called `name`; `None` or `""` is the root logger
    pub fn get_logger(&self, name: Option<&str>) -> Arc<Logger> {
        let name = match name {
            Some(n) if !n.is_empty() => n,
            _ => ROOT_LOGGER_NAME,
        };

        if let Some(logger) = self.loggers.read().get(name) {
            return Arc::clone(logger);
        }

        let mut loggers = self.loggers.write();
        Arc::clone(loggers.entry(name.to_string()).or_insert_with(|| {
            Arc::new(Logger::new(name.to_string(), Arc::clone(&self.default_level)))
        }))
    }

    /// Threshold for loggers that have none of their own
    pub fn default_level(&self) -> LogLevel {
        *self.default_level.read()
    }

    pub fn set_default_level(&self, level: LogLevel) {
        *self.default_level.write() = level;
    }

    pub fn contains(&self, name: &str) -> bool {
        self.loggers.read().contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.loggers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.loggers.read().is_empty()
    }
}

impl Default for LoggerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Fetch or create a logger in the global registry
pub fn get_logger(name: Option<&str>) -> Arc<Logger> {
    LoggerRegistry::global().get_logger(name)
}
