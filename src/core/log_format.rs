//! Percent-style record templates
//!
//! A [`LogFormat`] turns a [`LogEntry`] into text by substituting
//! `%(field)s` placeholders:
//! - `asctime`: the record timestamp, rendered with a [`TimestampFormat`]
//! - `levelname` / `levelno`: `INFO` / `20`
//! - `name`: the logger name
//! - `message`: the record message
//! - `thread` / `threadName`: thread id and thread name (id if unnamed)
//!
//! `%%` produces a literal `%`. Unknown placeholders are kept verbatim.

use super::handler::Formatter;
use super::log_entry::LogEntry;
use super::timestamp::TimestampFormat;
use std::borrow::Cow;

pub const DEFAULT_TEMPLATE: &str = "%(message)s";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFormat {
    template: String,
    timestamp_format: TimestampFormat,
}

impl LogFormat {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            timestamp_format: TimestampFormat::default(),
        }
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn timestamp_format(&self) -> &TimestampFormat {
        &self.timestamp_format
    }

    /// Render `entry` through the template.
    ///
    /// Substituted values are never scanned for placeholders again, so a
    /// message containing `%(name)s` is printed as-is. A non-empty context is
    /// appended on its own line as `key=value` pairs.
    pub fn render(&self, entry: &LogEntry) -> String {
        let mut out = String::with_capacity(self.template.len() + entry.message.len());
        let mut rest = self.template.as_str();

        while let Some(pos) = rest.find('%') {
            out.push_str(&rest[..pos]);
            let tail = &rest[pos..];

            if let Some(after) = tail.strip_prefix("%%") {
                out.push('%');
                rest = after;
                continue;
            }

            if let Some(inner) = tail.strip_prefix("%(") {
                if let Some(close) = inner.find(")s") {
                    if let Some(value) = self.field(&inner[..close], entry) {
                        out.push_str(&value);
                        rest = &inner[close + 2..];
                        continue;
                    }
                }
            }

            out.push('%');
            rest = &tail[1..];
        }
        out.push_str(rest);

        if let Some(ref context) = entry.context {
            if !context.is_empty() {
                out.push('\n');
                out.push_str(&context.format_fields());
            }
        }

        out
    }

    fn field<'a>(&self, key: &str, entry: &'a LogEntry) -> Option<Cow<'a, str>> {
        let value = match key {
            "asctime" => Cow::Owned(self.timestamp_format.format(&entry.timestamp)),
            "levelname" => Cow::Borrowed(entry.level.to_str()),
            "levelno" => Cow::Owned(entry.level.value().to_string()),
            "name" => Cow::Borrowed(entry.logger_name.as_str()),
            "message" => Cow::Borrowed(entry.message.as_str()),
            "thread" => Cow::Borrowed(entry.thread_id.as_str()),
            "threadName" => Cow::Borrowed(entry.thread_label()),
            _ => return None,
        };
        Some(value)
    }
}

impl Default for LogFormat {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPLATE)
    }
}

impl Formatter for LogFormat {
    fn format(&self, entry: &LogEntry) -> String {
        self.render(entry)
    }
}
