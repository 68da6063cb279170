pub mod colors;
mod formatter;
mod log_line;

pub use formatter::{LineFormatter, Zone};
pub use log_line::FormattedLogLine;
