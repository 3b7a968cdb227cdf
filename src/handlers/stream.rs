//! Stream handler implementation

use crate::core::{Formatter, Handler, LogEntry, LogFormat, Result};
use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

pub const DEFAULT_HANDLER_NAME: &str = "stream";

/// Writes each formatted record, followed by a newline, to a byte stream.
///
/// # Example
///
/// ```
/// use log_druid::handlers::{SharedBuffer, StreamHandler};
///
/// let buffer = SharedBuffer::new();
/// let handler = StreamHandler::new(buffer.clone()).with_name("capture");
/// ```
pub struct StreamHandler<W: Write + Send + Sync = io::Stderr> {
    writer: W,
    formatter: Arc<dyn Formatter>,
    name: String,
}

impl StreamHandler<io::Stderr> {
    /// Handler on standard error, the usual home of diagnostics
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl StreamHandler<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send + Sync> StreamHandler<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            formatter: Arc::new(LogFormat::default()),
            name: DEFAULT_HANDLER_NAME.to_string(),
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn with_formatter(mut self, formatter: Arc<dyn Formatter>) -> Self {
        self.formatter = formatter;
        self
    }
}

impl Default for StreamHandler<io::Stderr> {
    fn default() -> Self {
        Self::stderr()
    }
}

impl<W: Write + Send + Sync> Handler for StreamHandler<W> {
    fn handle(&mut self, entry: &LogEntry) -> Result<()> {
        let output = self.formatter.format(entry);
        writeln!(self.writer, "{}", output)?;
        self.writer.flush()?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_formatter(&mut self, formatter: Arc<dyn Formatter>) {
        self.formatter = formatter;
    }
}

/// Cloneable in-memory sink; every clone appends to the same buffer.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded as UTF-8
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.lock()).into_owned()
    }

    pub fn clear(&self) {
        self.bytes.lock().clear();
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.lock().is_empty()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
