use std::io;

use clap::Parser;
use debugfmt::{Level, LogRecord, Renderer};

use super::Args;
use crate::prelude::*;

pub fn run() -> Result<()> {
    let args = Args::parse();
    let renderer = Renderer::new(io::stdout());

    let records = if args.demo {
        demo_records()
    } else {
        vec![record_from_args(args)]
    };

    for record in &records {
        renderer.render(record)?;
    }
    renderer.flush()?;

    Ok(())
}

fn record_from_args(args: Args) -> LogRecord {
    let message = args.message.unwrap_or_default();
    args.fields
        .into_iter()
        .fold(LogRecord::new(args.level, message), |record, (name, value)| {
            record.with_field(name, value)
        })
}

fn demo_records() -> Vec<LogRecord> {
    vec![
        LogRecord::new(Level::Info, "hello")
            .with_field("address", "http://localhost:3000")
            .with_field("foo", "bar"),
        LogRecord::new(Level::Info, "hello").with_field("foo", "bar"),
        LogRecord::new(Level::Warn, "holy guacamole").with_field("foo", "bar"),
        LogRecord::new(Level::Error, "boom").with_field("foo", "bar"),
    ]
}
