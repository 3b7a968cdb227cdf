//! Per-level ANSI coloring of rendered records

use crate::core::{Formatter, LogEntry, LogFormat, LogLevel};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const COLOR_GRAY: &str = "\x1b[90m";
pub const COLOR_GREEN: &str = "\x1b[92m";
pub const COLOR_YELLOW: &str = "\x1b[93m";
pub const COLOR_RED: &str = "\x1b[91m";
pub const COLOR_MAGENTA: &str = "\x1b[95m";
pub const COLOR_NORMAL: &str = "\x1b[0m";

/// Foreground escape sequence for a terminal color
///
/// ```
/// use log_druid::formatter::{ansi_fg, COLOR_GREEN};
///
/// assert_eq!(ansi_fg(colored::Color::BrightGreen), COLOR_GREEN);
/// ```
pub fn ansi_fg(color: colored::Color) -> String {
    format!("\x1b[{}m", color.to_fg_str())
}

/// Level to color-code mapping.
///
/// Always replaced as a whole on a [`ColorFormatter`]; levels missing from
/// the map render with the formatter's fallback color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorMap {
    codes: BTreeMap<LogLevel, String>,
}

impl ColorMap {
    /// A map with no entries; every level renders in the fallback color
    pub fn empty() -> Self {
        Self {
            codes: BTreeMap::new(),
        }
    }

    /// A complete map from one code per level
    pub fn from_codes(
        debug: impl Into<String>,
        info: impl Into<String>,
        warning: impl Into<String>,
        error: impl Into<String>,
        critical: impl Into<String>,
    ) -> Self {
        Self::empty()
            .with(LogLevel::Debug, debug)
            .with(LogLevel::Info, info)
            .with(LogLevel::Warning, warning)
            .with(LogLevel::Error, error)
            .with(LogLevel::Critical, critical)
    }

    #[must_use]
    pub fn with(mut self, level: LogLevel, code: impl Into<String>) -> Self {
        self.codes.insert(level, code.into());
        self
    }

    #[must_use]
    pub fn with_color(self, level: LogLevel, color: colored::Color) -> Self {
        self.with(level, ansi_fg(color))
    }

    pub fn get(&self, level: LogLevel) -> Option<&str> {
        self.codes.get(&level).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (LogLevel, &str)> {
        self.codes.iter().map(|(level, code)| (*level, code.as_str()))
    }
}

impl Default for ColorMap {
    fn default() -> Self {
        LogLevel::ALL
            .into_iter()
            .map(|level| (level, ansi_fg(level.color())))
            .collect()
    }
}

impl<S: Into<String>> FromIterator<(LogLevel, S)> for ColorMap {
    fn from_iter<I: IntoIterator<Item = (LogLevel, S)>>(iter: I) -> Self {
        Self {
            codes: iter.into_iter().map(|(level, code)| (level, code.into())).collect(),
        }
    }
}

/// Formatter that renders a record through a [`LogFormat`] and wraps the
/// result in the color mapped to the record's level.
///
/// # Example
///
/// ```
/// use log_druid::core::{LogFormat, LogLevel};
/// use log_druid::formatter::{ColorFormatter, COLOR_GRAY, COLOR_RED};
///
/// let formatter = ColorFormatter::new(LogFormat::default());
/// assert_eq!(
///     formatter.render(LogLevel::Error, "boom"),
///     format!("{}boom{}", COLOR_RED, COLOR_GRAY)
/// );
/// ```
#[derive(Debug)]
pub struct ColorFormatter {
    format: LogFormat,
    colors: RwLock<ColorMap>,
    fallback: String,
    reset: String,
}

impl ColorFormatter {
    pub fn new(format: LogFormat) -> Self {
        Self {
            format,
            colors: RwLock::new(ColorMap::default()),
            fallback: COLOR_GRAY.to_string(),
            reset: COLOR_GRAY.to_string(),
        }
    }

    #[must_use]
    pub fn with_color_map(self, colors: ColorMap) -> Self {
        *self.colors.write() = colors;
        self
    }

    /// Color used for levels missing from the map
    #[must_use]
    pub fn with_fallback(mut self, code: impl Into<String>) -> Self {
        self.fallback = code.into();
        self
    }

    /// Code appended after every rendered line
    #[must_use]
    pub fn with_reset(mut self, code: impl Into<String>) -> Self {
        self.reset = code.into();
        self
    }

    /// Wrap `text` in the color for `level` followed by the reset code
    pub fn render(&self, level: LogLevel, text: &str) -> String {
        let colors = self.colors.read();
        let color = colors.get(level).unwrap_or(self.fallback.as_str());

        let mut out = String::with_capacity(color.len() + text.len() + self.reset.len());
        out.push_str(color);
        out.push_str(text);
        out.push_str(&self.reset);
        out
    }

    /// Replace the whole color map; takes effect on the next render
    pub fn set_color_map(&self, colors: ColorMap) {
        *self.colors.write() = colors;
    }

    pub fn color_map(&self) -> ColorMap {
        self.colors.read().clone()
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    pub fn reset_code(&self) -> &str {
        &self.reset
    }

    pub fn log_format(&self) -> &LogFormat {
        &self.format
    }
}

impl Formatter for ColorFormatter {
    fn format(&self, entry: &LogEntry) -> String {
        self.render(entry.level, &self.format.render(entry))
    }
}
