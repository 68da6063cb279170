//! Colored, human-friendly rendering of structured log records.
//!
//! Each record becomes one line: a gray `HH:MM:SS` local time, a fixed-width level label, the
//! message, and its fields as `name=value` pairs in insertion order.
//!
//! ```no_run
//! use debugfmt::{Level, LogRecord, Renderer};
//!
//! let renderer = Renderer::new(std::io::stdout());
//! let record = LogRecord::new(Level::Info, "hello")
//!     .with_field("address", "http://localhost:3000")
//!     .with_field("foo", "bar");
//! renderer.render(&record)?;
//! # Ok::<(), std::io::Error>(())
//! ```

pub mod format;
pub mod handler;
pub mod record;
pub mod renderer;

pub use record::{Fields, Level, LogRecord};
pub use renderer::Renderer;
