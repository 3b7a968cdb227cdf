//! Timestamp formatting utilities
//!
//! Renders the `%(asctime)s` field of a [`LogFormat`](super::LogFormat).

use super::error::{LoggerError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Timestamp format options for the banner line
///
/// # Examples
///
/// ```
/// use log_druid::TimestampFormat;
/// use chrono::Utc;
///
/// let timestamp = TimestampFormat::default().format(&Utc::now());
/// // Output: "2025-01-08 10:30:45,123"
/// assert_eq!(timestamp.len(), 23);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// Classic logging "asctime": `2025-01-08 10:30:45,123`
    #[default]
    Asctime,

    /// ISO 8601 with milliseconds: `2025-01-08T10:30:45.123Z`
    Iso8601,

    /// RFC 3339 format: `2025-01-08T10:30:45+00:00`
    Rfc3339,

    /// Unix timestamp in seconds: `1736332245`
    Unix,

    /// Custom strftime format
    ///
    /// # Examples
    ///
    /// ```
    /// use log_druid::TimestampFormat;
    ///
    /// let format = TimestampFormat::Custom("%H:%M:%S".to_string());
    /// ```
    Custom(String),
}

impl TimestampFormat {
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Utc>) -> String {
        match self {
            TimestampFormat::Asctime => datetime.format("%Y-%m-%d %H:%M:%S,%3f").to_string(),
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::Unix => datetime.timestamp().to_string(),
            TimestampFormat::Custom(format_str) => {
                let mut out = String::new();
                match write!(out, "{}", datetime.format(format_str)) {
                    Ok(()) => out,
                    Err(_) => TimestampFormat::Asctime.format(datetime),
                }
            }
        }
    }

    /// Reject a `Custom` pattern chrono cannot render
    pub fn validate(&self) -> Result<()> {
        match self {
            TimestampFormat::Custom(format_str) => {
                if StrftimeItems::new(format_str).any(|item| matches!(item, Item::Error)) {
                    return Err(LoggerError::formatter(
                        "strftime",
                        format!("invalid timestamp pattern {:?}", format_str),
                    ));
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }
}
