//! Handler and formatter hooks invoked at emit time

use super::{error::Result, log_entry::LogEntry};
use std::sync::Arc;

/// Converts a record into its final text right before emission.
pub trait Formatter: Send + Sync {
    fn format(&self, entry: &LogEntry) -> String;
}

/// Routes formatted records to an output destination.
pub trait Handler: Send + Sync {
    fn handle(&mut self, entry: &LogEntry) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
    fn set_formatter(&mut self, formatter: Arc<dyn Formatter>);
}
