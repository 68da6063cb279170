use std::fmt::{self, Display};

use anyhow::anyhow;
use time::OffsetDateTime;

#[derive(
    Debug,
    Clone,
    Copy,
    Ord,
    PartialOrd,
    Eq,
    PartialEq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::FromRepr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[repr(u8)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

impl Level {
    /// Fixed-width label shown in the rendered line.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => " INFO",
            Self::Warn => " WARN",
            Self::Error => "ERROR",
            Self::Fatal => "FATAL",
        }
    }
}

impl TryFrom<u8> for Level {
    type Error = anyhow::Error;

    fn try_from(severity: u8) -> anyhow::Result<Self> {
        Self::from_repr(severity).ok_or_else(|| anyhow!("unknown log level severity: {severity}"))
    }
}

pub type FieldValue = Box<dyn Display + Send + Sync>;

/// Named fields of a record, kept in insertion order.
#[derive(Default)]
pub struct Fields {
    entries: Vec<(String, FieldValue)>,
}

impl Fields {
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Inserts a field. Re-inserting a known name replaces its value but keeps its position.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Display + Send + Sync + 'static) {
        let name = name.into();
        let value: FieldValue = Box::new(value);

        match self.entries.iter().position(|(existing, _)| *existing == name) {
            Some(index) => self.entries[index].1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn get(&self, name: &str) -> Option<&(dyn Display + Send + Sync + 'static)> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &(dyn Display + Send + Sync + 'static))> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for Fields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(name, value)| (name, value.to_string())))
            .finish()
    }
}

#[derive(Debug)]
pub struct LogRecord {
    pub level: Level,
    pub timestamp: OffsetDateTime,
    pub message: String,
    pub fields: Fields,
}

impl LogRecord {
    /// Creates a record stamped with the current time.
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            timestamp: OffsetDateTime::now_utc(),
            message: message.into(),
            fields: Fields::new(),
        }
    }

    #[must_use]
    pub fn at(mut self, timestamp: OffsetDateTime) -> Self {
        self.timestamp = timestamp;
        self
    }

    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Display + Send + Sync + 'static) -> Self {
        self.fields.insert(name, value);
        self
    }
}
