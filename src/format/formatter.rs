use chrono::TimeZone;
use colored::Color;
use nonempty_collections::nev;
use time::{OffsetDateTime, UtcOffset, format_description::BorrowedFormatItem};
use time_macros::format_description;

use super::{
    colors::{self, Paint},
    log_line::FormattedLogLine,
};
use crate::record::{Level, LogRecord};

const CLOCK_FORMAT: &[BorrowedFormatItem] = format_description!("[hour]:[minute]:[second]");

/// Where rendered timestamps are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    /// Time zone of the process, looked up for every timestamp so DST changes are followed.
    Local,
    Fixed(UtcOffset),
}

impl Zone {
    fn offset_at(self, timestamp: OffsetDateTime) -> UtcOffset {
        match self {
            Self::Local => local_offset_at(timestamp),
            Self::Fixed(offset) => offset,
        }
    }
}

fn local_offset_at(timestamp: OffsetDateTime) -> UtcOffset {
    let seconds = chrono::Local
        .timestamp_opt(timestamp.unix_timestamp(), timestamp.nanosecond())
        .single()
        .map_or(0, |local| local.offset().local_minus_utc());

    UtcOffset::from_whole_seconds(seconds).unwrap_or(UtcOffset::UTC)
}

/// Turns records into colored lines.
#[derive(Debug, Clone, Copy)]
pub struct LineFormatter {
    zone: Zone,
}

impl LineFormatter {
    pub const fn new(zone: Zone) -> Self {
        Self { zone }
    }

    pub const fn local() -> Self {
        Self::new(Zone::Local)
    }

    pub const fn fixed(offset: UtcOffset) -> Self {
        Self::new(Zone::Fixed(offset))
    }

    pub fn format_record(&self, record: &LogRecord) -> FormattedLogLine {
        let color = Self::color_of_level(record.level);

        let header = nev![
            self.format_timestamp(record.timestamp),
            record.level.label().paint(color),
            record.message.paint(color),
        ];
        let fields = record
            .fields
            .iter()
            .map(|(name, value)| (name.paint(color), value.to_string()))
            .collect();

        FormattedLogLine::new(header, fields)
    }

    fn format_timestamp(&self, timestamp: OffsetDateTime) -> String {
        let offset = self.zone.offset_at(timestamp);
        Self::format_clock(timestamp.to_offset(offset)).paint(colors::TIMESTAMP)
    }

    fn format_clock(timestamp: OffsetDateTime) -> String {
        timestamp
            .format(CLOCK_FORMAT)
            .unwrap_or_else(|e| panic!("failed to format timestamp: {e}"))
    }

    const fn color_of_level(level: Level) -> Color {
        match level {
            Level::Debug => colors::levels::DEBUG,
            Level::Info => colors::levels::INFO,
            Level::Warn => colors::levels::WARN,
            Level::Error => colors::levels::ERROR,
            Level::Fatal => colors::levels::FATAL,
        }
    }
}
