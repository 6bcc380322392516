use super::{timestamp, LogOptions, LogOutput, LogPayload};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Stdout, Write};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Writes messages and tables to the console.
///
/// Messages are rendered as `"<timestamp> | <prefix><message>"` and colored
/// when [`LogOptions::color`] is set. Tables are rendered as an aligned
/// two-column table. The writer is flushed after every payload.
pub struct StdOutput<W: Write = Stdout> {
    writer: W,
}

impl StdOutput<Stdout> {
    /// Writes to the standard output.
    pub fn new() -> Self {
        Self {
            writer: io::stdout(),
        }
    }
}

impl Default for StdOutput<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> StdOutput<W> {
    /// Writes to the given writer instead of the standard output.
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Gets a reference to the underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.writer
    }
}

impl<W: Write> LogOutput for StdOutput<W> {
    fn supports_tabular(&self) -> bool {
        true
    }

    fn log(&mut self, payload: &LogPayload<'_>, prefix: &str, options: &LogOptions) -> Result<()> {
        let out = match payload {
            LogPayload::Message(message) => {
                let mut out = format!("{}{}", prefix, message);
                if options.with_timestamp {
                    out = format!("{} | {}", timestamp(TIMESTAMP_FORMAT), out);
                }
                match options.color {
                    Some(color) => out.as_str().color(color).to_string(),
                    None => out,
                }
            }
            LogPayload::Tabular(tabular) => tabular.to_string(),
        };

        writeln!(self.writer, "{}", out)?;
        self.writer.flush()?;
        Ok(())
    }
}
