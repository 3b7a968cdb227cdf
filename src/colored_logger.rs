//! The colored logging facade
//!
//! A [`ColoredLogger`] wraps a named [`Logger`], attaches one stream handler
//! carrying a [`ColorFormatter`], and renders every call as a banner block:
//!
//! ```text
//! -------------------------------------------------
//!  2025-01-08 10:30:45,123 - INFO billing - api - 
//! -------------------------------------------------
//! File: main.rs →  Function: main →  Line No: 12
//! ---------------- ↓  ↓  ↓  ↓  ↓ ----------------
//! File: api.rs →  Function: charge →  Line No: 88
//! ---------------- ↓  ↓  ↓  ↓  ↓ ----------------
//! [20]charge accepted
//! -------------------------------------------------
//! ```
//!
//! Colors are applied by the formatter when the record is emitted, not while
//! the block is composed.

use crate::caller::{BacktraceProvider, CallerContextProvider, CallerFrame};
use crate::core::{
    Formatter, Handler, LogContext, LogFormat, LogLevel, Logger, LoggerError, LoggerRegistry,
    Result, TimestampFormat,
};
use crate::formatter::{ColorFormatter, ColorMap, COLOR_GRAY, COLOR_MAGENTA, COLOR_NORMAL};
use crate::handlers::StreamHandler;
use crate::pattern::{center_margins, PatternTemplate, DEFAULT_PATTERN_LEN, DEFAULT_PATTERN_STYLE};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::io::Write;
use std::panic::Location;
use std::sync::Arc;

/// Name of the handler a facade attaches to its logger
pub const FACADE_HANDLER_NAME: &str = "log_druid.colored";

/// Separator drawn between caller frames
pub const DOWN_ARROWS: &str = "↓  ↓  ↓  ↓  ↓";

pub const DEFAULT_N_FUNC_LOGS: usize = 3;

const FACADE_PATH: &str = concat!(module_path!(), "::");

/// Construction-time settings of a [`ColoredLogger`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColoredLoggerConfig {
    /// Logger name; `None` selects the root logger
    pub name: Option<String>,
    /// Threshold to force on the logger; `None` leaves the existing one alone
    pub level: Option<LogLevel>,
    /// Label printed in the banner between level and logger name
    pub app_name: Option<String>,
    /// Capture and print caller frames
    pub inspect_mode: bool,
    pub pattern_style: char,
    pub pattern_len: usize,
    /// How many caller frames to print
    pub n_func_logs: usize,
    pub timestamp_format: TimestampFormat,
}

impl Default for ColoredLoggerConfig {
    fn default() -> Self {
        Self {
            name: None,
            level: None,
            app_name: None,
            inspect_mode: true,
            pattern_style: DEFAULT_PATTERN_STYLE,
            pattern_len: DEFAULT_PATTERN_LEN,
            n_func_logs: DEFAULT_N_FUNC_LOGS,
            timestamp_format: TimestampFormat::default(),
        }
    }
}

impl ColoredLoggerConfig {
    /// Check settings that would garble the banner block
    pub fn validate(&self) -> Result<()> {
        if self.pattern_style.is_control() {
            return Err(LoggerError::config(
                "pattern_style",
                format!("control character {:?} cannot draw a separator", self.pattern_style),
            ));
        }
        self.timestamp_format.validate()
    }
}

pub struct ColoredLogger {
    config: ColoredLoggerConfig,
    pattern: PatternTemplate,
    down_way: String,
    formatter: Arc<ColorFormatter>,
    logger: Arc<Logger>,
    provider: Arc<dyn CallerContextProvider>,
}

impl ColoredLogger {
    /// Facade with default settings on the logger called `name`
    ///
    /// # Example
    ///
    /// ```
    /// use log_druid::ColoredLogger;
    ///
    /// let logger = ColoredLogger::new("checkout");
    /// logger.info("cart created");
    /// ```
    pub fn new(name: impl Into<String>) -> Self {
        Self::builder().name(name).build()
    }

    /// Create a builder for ColoredLogger
    ///
    /// # Example
    /// ```
    /// use log_druid::prelude::*;
    ///
    /// let logger = ColoredLogger::builder()
    ///     .name("worker")
    ///     .level(LogLevel::Debug)
    ///     .app_name("billing")
    ///     .pattern('=', 60)
    ///     .n_func_logs(2)
    ///     .build();
    /// ```
    #[must_use]
    pub fn builder() -> ColoredLoggerBuilder {
        ColoredLoggerBuilder::new()
    }

    pub fn config(&self) -> &ColoredLoggerConfig {
        &self.config
    }

    pub fn inspect_mode(&self) -> bool {
        self.config.inspect_mode
    }

    pub fn pattern(&self) -> &PatternTemplate {
        &self.pattern
    }

    /// The template the formatter renders records through
    pub fn log_format(&self) -> &LogFormat {
        self.formatter.log_format()
    }

    /// The underlying named logger
    pub fn logger(&self) -> &Arc<Logger> {
        &self.logger
    }

    /// Replace every level's color at once; omitted levels fall back to gray
    pub fn set_color_map(&self, colors: ColorMap) {
        self.formatter.set_color_map(colors);
    }

    /// Replace the color map with one code per level
    pub fn set_color_codes(
        &self,
        debug: impl Into<String>,
        info: impl Into<String>,
        warning: impl Into<String>,
        error: impl Into<String>,
        critical: impl Into<String>,
    ) {
        self.set_color_map(ColorMap::from_codes(debug, info, warning, error, critical));
    }

    pub fn color_map(&self) -> ColorMap {
        self.formatter.color_map()
    }

    /// The message body a call at `level` would hand to the logger from here
    #[track_caller]
    pub fn render_message(&self, level: LogLevel, message: impl Display) -> String {
        let frames = self.capture_frames(Location::caller());
        self.compose_message(level, &message, &frames)
    }

    #[track_caller]
    pub fn log(&self, level: LogLevel, message: impl Display) {
        self.emit(level, &message, None);
    }

    /// Log with extra fields forwarded verbatim to the record
    #[track_caller]
    pub fn log_with_context(&self, level: LogLevel, message: impl Display, context: LogContext) {
        self.emit(level, &message, Some(context));
    }

    #[track_caller]
    pub fn debug(&self, message: impl Display) {
        self.emit(LogLevel::Debug, &message, None);
    }

    #[track_caller]
    pub fn info(&self, message: impl Display) {
        self.emit(LogLevel::Info, &message, None);
    }

    #[track_caller]
    pub fn warning(&self, message: impl Display) {
        self.emit(LogLevel::Warning, &message, None);
    }

    #[track_caller]
    pub fn error(&self, message: impl Display) {
        self.emit(LogLevel::Error, &message, None);
    }

    #[track_caller]
    pub fn critical(&self, message: impl Display) {
        self.emit(LogLevel::Critical, &message, None);
    }

    #[track_caller]
    pub fn debug_with_context(&self, message: impl Display, context: LogContext) {
        self.emit(LogLevel::Debug, &message, Some(context));
    }

    #[track_caller]
    pub fn info_with_context(&self, message: impl Display, context: LogContext) {
        self.emit(LogLevel::Info, &message, Some(context));
    }

    #[track_caller]
    pub fn warning_with_context(&self, message: impl Display, context: LogContext) {
        self.emit(LogLevel::Warning, &message, Some(context));
    }

    #[track_caller]
    pub fn error_with_context(&self, message: impl Display, context: LogContext) {
        self.emit(LogLevel::Error, &message, Some(context));
    }

    #[track_caller]
    pub fn critical_with_context(&self, message: impl Display, context: LogContext) {
        self.emit(LogLevel::Critical, &message, Some(context));
    }

    pub fn flush(&self) -> Result<()> {
        self.logger.flush()
    }

    #[track_caller]
    #[inline(never)]
    fn emit(&self, level: LogLevel, message: &dyn Display, context: Option<LogContext>) {
        if !self.logger.is_enabled_for(level) {
            return;
        }

        let frames = self.capture_frames(Location::caller());
        let body = self.compose_message(level, message, &frames);
        match context {
            Some(context) => self.logger.log_with_context(level, body, context),
            None => self.logger.log(level, body),
        }
    }

    fn capture_frames(&self, call_site: &'static Location<'static>) -> Vec<CallerFrame> {
        if !self.config.inspect_mode {
            return Vec::new();
        }
        self.provider.capture(self.config.n_func_logs, call_site)
    }

    /// Caller frames (most distant first), then `[<levelno>]<message>`.
    fn compose_message(&self, level: LogLevel, message: &dyn Display, frames: &[CallerFrame]) -> String {
        let mut body = String::new();
        if self.config.inspect_mode {
            body.push_str(COLOR_GRAY);
            for frame in frames.iter().rev() {
                body.push('\n');
                body.push_str(&frame.to_string());
                body.push('\n');
                body.push_str(&self.down_way);
            }
        }
        body.push_str(&format!("\n[{}]{}\n", level.value(), message));
        body
    }
}

impl fmt::Debug for ColoredLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColoredLogger")
            .field("config", &self.config)
            .field("logger", &self.logger)
            .finish()
    }
}

/// Banner template: pattern line, centered heading, pattern line, message,
/// closing pattern line.
fn compose_template(pattern: &PatternTemplate, app_name: Option<&str>) -> String {
    let mut heading = String::from("%(asctime)s - %(levelname)s");
    if let Some(app) = app_name {
        heading.push_str(&format!(" {} -", app.replace('%', "%%")));
    }
    heading.push_str(" %(name)s -");
    let heading = format!(" {} ", heading);

    // Pattern characters are literal text in the template
    let fill = pattern.style().to_string().replace('%', "%%");
    let (left, right) = center_margins(heading.chars().count(), pattern.width());
    let heading = format!("{}{}{}", fill.repeat(left), heading, fill.repeat(right));
    let line = pattern.line().replace('%', "%%");

    format!(
        "\n{normal}{line}{normal}\n{magenta}{heading}{normal}\n{gray}{line}{normal}\n%(message)s{gray}\n{gray}{line}{normal}",
        normal = COLOR_NORMAL,
        magenta = COLOR_MAGENTA,
        gray = COLOR_GRAY,
        line = line,
        heading = heading,
    )
}

/// Builder for constructing a [`ColoredLogger`] with a fluent API
pub struct ColoredLoggerBuilder {
    config: ColoredLoggerConfig,
    handler: Option<Box<dyn Handler>>,
    provider: Option<Arc<dyn CallerContextProvider>>,
    colors: ColorMap,
}

impl ColoredLoggerBuilder {
    pub fn new() -> Self {
        Self::from_config(ColoredLoggerConfig::default())
    }

    pub fn from_config(config: ColoredLoggerConfig) -> Self {
        Self {
            config,
            handler: None,
            provider: None,
            colors: ColorMap::default(),
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.config.name = Some(name.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.config.level = Some(level);
        self
    }

    /// Leave the logger's threshold as it is (the default)
    #[must_use = "builder methods return a new value"]
    pub fn inherit_level(mut self) -> Self {
        self.config.level = None;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn app_name(mut self, app_name: impl Into<String>) -> Self {
        self.config.app_name = Some(app_name.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn inspect_mode(mut self, enabled: bool) -> Self {
        self.config.inspect_mode = enabled;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn pattern(mut self, style: char, len: usize) -> Self {
        self.config.pattern_style = style;
        self.config.pattern_len = len;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn n_func_logs(mut self, n: usize) -> Self {
        self.config.n_func_logs = n;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.config.timestamp_format = format;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn color_map(mut self, colors: ColorMap) -> Self {
        self.colors = colors;
        self
    }

    /// Write blocks to `writer` instead of standard error
    #[must_use = "builder methods return a new value"]
    pub fn writer<W: Write + Send + Sync + 'static>(mut self, writer: W) -> Self {
        self.handler = Some(Box::new(
            StreamHandler::new(writer).with_name(FACADE_HANDLER_NAME),
        ));
        self
    }

    /// Supply caller frames from `provider` instead of walking the stack
    #[must_use = "builder methods return a new value"]
    pub fn provider<P: CallerContextProvider + 'static>(mut self, provider: P) -> Self {
        self.provider = Some(Arc::new(provider));
        self
    }

    /// Validate the configuration, then build against the process-wide registry
    pub fn try_build(self) -> Result<ColoredLogger> {
        self.try_build_in(LoggerRegistry::global())
    }

    /// Validate the configuration, then build against `registry`
    pub fn try_build_in(self, registry: &LoggerRegistry) -> Result<ColoredLogger> {
        self.config.validate()?;
        Ok(self.build_in(registry))
    }

    /// Build against the process-wide registry
    pub fn build(self) -> ColoredLogger {
        self.build_in(LoggerRegistry::global())
    }

    /// Build against `registry`.
    ///
    /// The facade handler replaces any handler an earlier facade attached to
    /// the same logger, so rebuilding never doubles the output.
    pub fn build_in(self, registry: &LoggerRegistry) -> ColoredLogger {
        let config = self.config;
        let app_name = config.app_name.as_deref().filter(|name| !name.is_empty());

        let pattern = PatternTemplate::new(config.pattern_style, config.pattern_len);
        let down_way = pattern.center(DOWN_ARROWS);
        let log_format = LogFormat::new(compose_template(&pattern, app_name))
            .with_timestamp_format(config.timestamp_format.clone());
        let formatter = Arc::new(ColorFormatter::new(log_format).with_color_map(self.colors));

        let logger = registry.get_logger(config.name.as_deref());
        if let Some(level) = config.level {
            logger.set_level(level);
        }

        let mut handler = self.handler.unwrap_or_else(|| {
            Box::new(StreamHandler::stderr().with_name(FACADE_HANDLER_NAME))
        });
        let shared: Arc<dyn Formatter> = formatter.clone();
        handler.set_formatter(shared);
        logger.replace_handler(handler);

        let provider = self.provider.unwrap_or_else(|| {
            Arc::new(BacktraceProvider::new().with_internal_path(FACADE_PATH))
        });

        ColoredLogger {
            config,
            pattern,
            down_way,
            formatter,
            logger,
            provider,
        }
    }
}

impl Default for ColoredLoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::caller::FixedProvider;
    use crate::formatter::{COLOR_GREEN, COLOR_RED};
    use crate::handlers::SharedBuffer;

    fn frames(n: u32) -> Vec<CallerFrame> {
        // Most immediate caller first
        (0..n)
            .map(|i| CallerFrame::new(format!("f{}.rs", i), format!("func{}", i), 10 + i))
            .collect()
    }

    fn builder(name: &str, buffer: &SharedBuffer) -> ColoredLoggerBuilder {
        ColoredLogger::builder()
            .name(name)
            .level(LogLevel::Debug)
            .timestamp_format(TimestampFormat::Custom("TS".to_string()))
            .writer(buffer.clone())
    }

    #[test]
    fn test_default_config() {
        let config = ColoredLoggerConfig::default();
        assert!(config.inspect_mode);
        assert_eq!(config.pattern_style, '-');
        assert_eq!(config.pattern_len, 50);
        assert_eq!(config.n_func_logs, 3);
        assert_eq!(config.level, None);
    }

    #[test]
    fn test_try_build_rejects_bad_config() {
        let registry = LoggerRegistry::new();

        let err = ColoredLogger::builder()
            .name("bad-style")
            .pattern('\n', 20)
            .try_build_in(&registry)
            .unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let err = ColoredLogger::builder()
            .name("bad-time")
            .timestamp_format(TimestampFormat::Custom("%Q".to_string()))
            .try_build_in(&registry)
            .unwrap_err();
        assert!(matches!(err, LoggerError::FormatterError { .. }));

        assert!(!registry.contains("bad-style"));
        assert!(ColoredLogger::builder()
            .name("good")
            .writer(SharedBuffer::new())
            .try_build_in(&registry)
            .is_ok());
    }

    #[test]
    fn test_invalid_timestamp_still_logs() {
        let registry = LoggerRegistry::new();
        let buffer = SharedBuffer::new();
        let logger = ColoredLogger::builder()
            .name("lenient")
            .inspect_mode(false)
            .timestamp_format(TimestampFormat::Custom("%Q".to_string()))
            .writer(buffer.clone())
            .build_in(&registry);

        logger.info("kept");

        assert!(buffer.contents().contains("[20]kept"));
        assert_eq!(logger.logger().metrics().dropped_count(), 0);
    }

    #[test]
    fn test_full_block_without_inspection() {
        let registry = LoggerRegistry::new();
        let buffer = SharedBuffer::new();
        let logger = builder("svc", &buffer)
            .inspect_mode(false)
            .pattern('-', 20)
            .build_in(&registry);

        logger.info("hello");

        let line = "-------------------";
        let expected = format!(
            "{green}\n{n}{line}{n}\n{m} TS - INFO svc - {n}\n{g}{line}{n}\n\n[20]hello\n{g}\n{g}{line}{n}{g}\n",
            green = COLOR_GREEN,
            n = COLOR_NORMAL,
            m = COLOR_MAGENTA,
            g = COLOR_GRAY,
            line = line,
        );
        assert_eq!(buffer.contents(), expected);
    }

    #[test]
    fn test_percent_pattern_style_rendered_literally() {
        let registry = LoggerRegistry::new();
        let buffer = SharedBuffer::new();
        let logger = builder("pct", &buffer)
            .inspect_mode(false)
            .pattern('%', 30)
            .build_in(&registry);

        logger.info("hello");

        let output = buffer.contents();
        assert_eq!(logger.pattern().len(), 29);
        assert_eq!(output.matches(logger.pattern().line()).count(), 3);
        assert!(output.contains(&format!(
            "{}%%%%% TS - INFO pct - %%%%%{}",
            COLOR_MAGENTA, COLOR_NORMAL
        )));
        assert!(output.contains("[20]hello"));
    }

    #[test]
    fn test_no_provenance_when_inspect_disabled() {
        let registry = LoggerRegistry::new();
        let buffer = SharedBuffer::new();
        let logger = builder("quiet", &buffer)
            .inspect_mode(false)
            .provider(FixedProvider::new(frames(5)))
            .build_in(&registry);

        logger.warning("disk at 91%");

        let output = buffer.contents();
        assert!(output.contains("[30]disk at 91%"));
        assert!(!output.contains("File:"));
        assert!(!output.contains("Function:"));
        assert!(!output.contains("Line No:"));
    }

    #[test]
    fn test_frames_most_distant_first() {
        let registry = LoggerRegistry::new();
        let buffer = SharedBuffer::new();
        let logger = builder("deep", &buffer)
            .provider(FixedProvider::new(frames(5)))
            .build_in(&registry);

        logger.error("boom");

        let output = buffer.contents();
        let files: Vec<&str> = output.lines().filter(|l| l.starts_with("File:")).collect();
        assert_eq!(
            files,
            vec![
                "File: f2.rs →  Function: func2 →  Line No: 12",
                "File: f1.rs →  Function: func1 →  Line No: 11",
                "File: f0.rs →  Function: func0 →  Line No: 10",
            ]
        );
        assert_eq!(output.matches(DOWN_ARROWS).count(), 3);
        assert!(output.contains("[40]boom"));
    }

    #[test]
    fn test_shallow_stack_reports_fewer_frames() {
        let registry = LoggerRegistry::new();
        let buffer = SharedBuffer::new();
        let logger = builder("shallow", &buffer)
            .n_func_logs(4)
            .provider(FixedProvider::new(frames(1)))
            .build_in(&registry);

        logger.critical("still logged");

        let output = buffer.contents();
        assert_eq!(output.matches("File:").count(), 1);
        assert!(output.contains("[50]still logged"));
    }

    #[test]
    fn test_render_message_layout() {
        let registry = LoggerRegistry::new();
        let buffer = SharedBuffer::new();
        let logger = builder("layout", &buffer)
            .pattern('-', 20)
            .n_func_logs(1)
            .provider(FixedProvider::new(frames(2)))
            .build_in(&registry);

        let body = logger.render_message(LogLevel::Info, 42);
        assert_eq!(
            body,
            format!(
                "{}\nFile: f0.rs →  Function: func0 →  Line No: 10\n- ↓  ↓  ↓  ↓  ↓ -\n[20]42\n",
                COLOR_GRAY
            )
        );
    }

    #[test]
    fn test_app_name_in_banner() {
        let registry = LoggerRegistry::new();
        let buffer = SharedBuffer::new();
        let logger = builder("api", &buffer)
            .app_name("billing 100%")
            .build_in(&registry);

        assert!(logger
            .log_format()
            .template()
            .contains("%(asctime)s - %(levelname)s billing 100%% - %(name)s -"));

        logger.debug("x");
        assert!(buffer.contents().contains("TS - DEBUG billing 100% - api -"));
    }

    #[test]
    fn test_empty_app_name_ignored() {
        let registry = LoggerRegistry::new();
        let logger = builder("api", &SharedBuffer::new())
            .app_name("")
            .build_in(&registry);

        assert!(logger
            .log_format()
            .template()
            .contains("%(asctime)s - %(levelname)s %(name)s -"));
    }

    #[test]
    fn test_set_color_map_applies_without_new_handler() {
        let registry = LoggerRegistry::new();
        let buffer = SharedBuffer::new();
        let logger = builder("colors", &buffer)
            .inspect_mode(false)
            .build_in(&registry);

        logger.set_color_map(ColorMap::empty().with(LogLevel::Debug, "<dbg>"));
        logger.set_color_map(ColorMap::empty().with(LogLevel::Debug, "<dbg>"));
        logger.debug("a");
        logger.info("b");

        let output = buffer.contents();
        assert_eq!(logger.logger().handler_count(), 1);
        assert!(output.starts_with("<dbg>"));
        assert!(!output.contains(COLOR_GREEN));

        logger.set_color_codes("d", "i", "w", COLOR_RED, "c");
        assert_eq!(logger.color_map().get(LogLevel::Error), Some(COLOR_RED));
    }

    #[test]
    fn test_rebuilding_does_not_duplicate_handlers() {
        let registry = LoggerRegistry::new();
        let first = SharedBuffer::new();
        let second = SharedBuffer::new();

        let _old = builder("shared", &first).build_in(&registry);
        let logger = builder("shared", &second)
            .inspect_mode(false)
            .build_in(&registry);
        logger.info("once");

        assert_eq!(logger.logger().handler_count(), 1);
        assert!(first.is_empty());
        assert_eq!(second.contents().matches("[20]once").count(), 1);
    }

    #[test]
    fn test_unset_level_leaves_threshold() {
        let registry = LoggerRegistry::new();
        registry.get_logger(Some("strict")).set_level(LogLevel::Error);

        let buffer = SharedBuffer::new();
        let logger = ColoredLogger::builder()
            .name("strict")
            .inspect_mode(false)
            .writer(buffer.clone())
            .build_in(&registry);

        logger.warning("filtered");
        logger.error("kept");

        assert_eq!(logger.logger().level(), Some(LogLevel::Error));
        let output = buffer.contents();
        assert!(!output.contains("filtered"));
        assert!(output.contains("[40]kept"));
    }

    #[test]
    fn test_context_forwarded() {
        let registry = LoggerRegistry::new();
        let buffer = SharedBuffer::new();
        let logger = builder("ctx", &buffer)
            .inspect_mode(false)
            .build_in(&registry);

        logger.error_with_context(
            "payment failed",
            LogContext::new().with_field("order", 1234).with_field("retry", false),
        );

        let output = buffer.contents();
        assert!(output.contains("[40]payment failed"));
        assert!(output.contains("order=1234 retry=false"));
    }

    #[inline(never)]
    fn log_from_helper(logger: &ColoredLogger) {
        logger.info("from helper");
    }

    #[test]
    fn test_backtrace_reports_external_caller() {
        let registry = LoggerRegistry::new();
        let buffer = SharedBuffer::new();
        let logger = builder("native", &buffer).n_func_logs(1).build_in(&registry);

        log_from_helper(&logger);

        let output = buffer.contents();
        assert_eq!(output.matches("File:").count(), 1);
        assert!(output.contains("File: colored_logger.rs"));
        assert!(output.contains("[20]from helper"));
    }
}
