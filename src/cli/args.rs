use anyhow::anyhow;
use clap::Parser;
use debugfmt::Level;

use crate::prelude::*;

#[derive(Debug, Parser)]
#[command(version, about, long_about=None)]
pub struct Args {
    /// Message of the record to render.
    #[arg(required_unless_present("demo"))]
    pub message: Option<String>,

    /// Level of the record.
    #[arg(short('L'), long, value_name("debug|info|warn|error|fatal"), default_value_t = Level::Info)]
    pub level: Level,

    /// Field attached to the record, can be repeated (see more with '--help')
    ///
    /// Fields are rendered in the order they are given. Passing the same name twice keeps the
    /// first position and the last value.
    #[arg(short('F'), long("field"), value_name("NAME=VALUE"), value_parser(parse_field), verbatim_doc_comment)]
    pub fields: Vec<(String, String)>,

    /// Render a few sample records instead.
    #[arg(long, conflicts_with_all(["message", "fields"]), default_value_t = false)]
    pub demo: bool,
}

fn parse_field(field: &str) -> Result<(String, String)> {
    let (name, value) = field
        .split_once('=')
        .ok_or_else(|| anyhow!("expected NAME=VALUE, got '{field}'"))?;

    if name.is_empty() {
        return Err(anyhow!("field name is empty in '{field}'"));
    }

    Ok((name.to_owned(), value.to_owned()))
}
