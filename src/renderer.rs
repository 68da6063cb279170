use std::io::{self, Write};

use parking_lot::Mutex;

use crate::{format::LineFormatter, record::LogRecord};

/// Renders records as colored lines onto a shared destination.
///
/// Every line is built in memory first and then written with a single call while holding the
/// destination lock, so concurrent renders never interleave within a line.
#[derive(Debug)]
pub struct Renderer<W> {
    formatter: LineFormatter,
    destination: Mutex<W>,
}

impl<W: Write> Renderer<W> {
    pub fn new(destination: W) -> Self {
        Self::with_formatter(LineFormatter::local(), destination)
    }

    pub fn with_formatter(formatter: LineFormatter, destination: W) -> Self {
        Self {
            formatter,
            destination: Mutex::new(destination),
        }
    }

    /// Renders one record. A failed write is returned as is, nothing is retried.
    pub fn render(&self, record: &LogRecord) -> io::Result<()> {
        let line = self.formatter.format_record(record).to_line();

        let mut destination = self.destination.lock();
        destination.write_all(line.as_bytes())
    }

    pub fn flush(&self) -> io::Result<()> {
        self.destination.lock().flush()
    }

    pub fn into_inner(self) -> W {
        self.destination.into_inner()
    }
}
