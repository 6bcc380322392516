use super::{timestamp, LogOptions, LogOutput, LogPayload};
use anyhow::{Context, Result};
use log::debug;
use std::{
    fs::{self, File, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f %Z";

/// Appends messages to a text file, one line per message.
///
/// Lines look like `"<timestamp with microseconds> | <prefix><message>"`.
/// Tabular payloads are ignored.
pub struct TextOutput {
    path: PathBuf,
    file: File,
}

impl TextOutput {
    /// Opens `log_dir/file_name` for appending.
    ///
    /// Missing parent directories are created. An absolute `file_name`
    /// replaces `log_dir`.
    pub fn new(log_dir: impl AsRef<Path>, file_name: impl AsRef<Path>) -> Result<Self> {
        let path = log_dir.as_ref().join(file_name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("Failed to open text log file {:?}", path))?;
        debug!("Opened text log file {:?}", path);
        Ok(Self { path, file })
    }

    /// Path of the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LogOutput for TextOutput {
    fn log(&mut self, payload: &LogPayload<'_>, prefix: &str, options: &LogOptions) -> Result<()> {
        let message = match payload {
            LogPayload::Message(message) => message,
            LogPayload::Tabular(_) => return Ok(()),
        };

        let mut out = format!("{}{}", prefix, message);
        if options.with_timestamp {
            out = format!("{} | {}", timestamp(TIMESTAMP_FORMAT), out);
        }
        writeln!(self.file, "{}", out)?;
        self.file.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TabularInput;
    use tempdir::TempDir;

    #[test]
    fn test_text_output_appends_lines() -> Result<()> {
        let tmp_dir = TempDir::new("text_output")?;
        let options = LogOptions::default().with_timestamp(false);
        {
            let mut output = TextOutput::new(tmp_dir.path(), "nested/debug.log")?;
            output.log(&"first".into(), "", &options)?;
        }
        let mut output = TextOutput::new(tmp_dir.path(), "nested/debug.log")?;
        output.log(&"second".into(), "p: ", &options)?;

        let content = fs::read_to_string(output.path())?;
        assert_eq!(content, "first\np: second\n");
        Ok(())
    }

    #[test]
    fn test_text_output_timestamp_has_microseconds() -> Result<()> {
        let tmp_dir = TempDir::new("text_output")?;
        let mut output = TextOutput::new(tmp_dir.path(), "debug.log")?;
        output.log(&"msg".into(), "", &LogOptions::default())?;

        let content = fs::read_to_string(output.path())?;
        let (ts, rest) = content.split_once(" | ").unwrap();
        assert_eq!(rest, "msg\n");
        let seconds = ts.split(' ').nth(1).unwrap();
        let (_, micros) = seconds.split_once('.').unwrap();
        assert_eq!(micros.len(), 6);
        Ok(())
    }

    #[test]
    fn test_text_output_ignores_tabular() -> Result<()> {
        let tmp_dir = TempDir::new("text_output")?;
        let mut output = TextOutput::new(tmp_dir.path(), "debug.log")?;
        let mut tabular = TabularInput::new();
        tabular.record("a", 1);
        output.log(&LogPayload::Tabular(&tabular), "", &LogOptions::default())?;

        assert_eq!(fs::read_to_string(output.path())?, "");
        Ok(())
    }
}
