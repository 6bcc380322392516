//! Destinations of log messages and tabular metrics.
//!
//! A [`LogOutput`] receives a [`LogPayload`], either a plain message or a
//! [`TabularInput`](crate::TabularInput), and declares which of the two it
//! handles with [`LogOutput::supports_text`] and
//! [`LogOutput::supports_tabular`]. The [`Logger`](crate::Logger) only
//! dispatches payloads an output supports.
//!
//! * [`StdOutput`] - messages and tables on the console, optionally colored
//! * [`TextOutput`] - messages appended to a text file
//! * [`NullOutput`] - discards everything
//!
//! The CSV output lives in the `logbook-csv` crate.
mod base;
mod null_output;
mod std_output;
mod text_output;

pub use base::{timestamp, LogOptions, LogOutput, LogPayload};
pub use null_output::NullOutput;
pub use std_output::StdOutput;
pub use text_output::TextOutput;
