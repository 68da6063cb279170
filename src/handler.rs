//! Plugs a [`Renderer`] into the `log` facade.

use std::io::Write;

use log::{
    LevelFilter, Log, Metadata, Record, SetLoggerError,
    kv::{self, Key, Value, VisitSource},
};

use crate::{
    record::{Fields, Level, LogRecord},
    renderer::Renderer,
};

/// Installs a renderer over `destination` as the global logger.
pub fn init<W: Write + Send + 'static>(destination: W, max_level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(Renderer::new(destination)))?;
    log::set_max_level(max_level);
    Ok(())
}

impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Self::Error,
            log::Level::Warn => Self::Warn,
            log::Level::Info => Self::Info,
            log::Level::Debug | log::Level::Trace => Self::Debug,
        }
    }
}

impl From<&Record<'_>> for LogRecord {
    fn from(record: &Record<'_>) -> Self {
        let mut log_record = Self::new(record.level().into(), record.args().to_string());
        // The collector never fails.
        let _ = record.key_values().visit(&mut FieldCollector(&mut log_record.fields));
        log_record
    }
}

struct FieldCollector<'a>(&'a mut Fields);

impl<'kvs> VisitSource<'kvs> for FieldCollector<'_> {
    fn visit_pair(&mut self, key: Key<'kvs>, value: Value<'kvs>) -> Result<(), kv::Error> {
        self.0.insert(key.as_str(), value.to_string());
        Ok(())
    }
}

impl<W: Write + Send> Log for Renderer<W> {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        // The facade has no error channel.
        let _ = self.render(&LogRecord::from(record));
    }

    fn flush(&self) {
        let _ = Renderer::flush(self);
    }
}
