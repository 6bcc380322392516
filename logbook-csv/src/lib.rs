//! CSV output of tabular metrics.
use anyhow::{Context, Result};
use log::debug;
use logbook_core::{LogOptions, LogOutput, LogPayload, LogbookError, TabularInput};
use std::{
    fs::{self, File},
    path::{Path, PathBuf},
};

/// Writes each logged [`TabularInput`] as a row of a CSV file.
///
/// The header is the key set of the first non-empty table, in insertion
/// order, and is written once. Later tables are written in header order;
/// keys they lack are left blank, and a key missing from the header fails
/// with [`LogbookError::TabularKeyMismatch`]. Messages are ignored.
pub struct CsvOutput {
    path: PathBuf,
    writer: csv::Writer<File>,
    header: Option<Vec<String>>,
}

impl CsvOutput {
    /// Creates `log_dir/file_name`, truncating an existing file.
    ///
    /// Missing parent directories are created.
    pub fn new(log_dir: impl AsRef<Path>, file_name: impl AsRef<Path>) -> Result<Self> {
        let path = log_dir.as_ref().join(file_name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = File::create(&path)
            .with_context(|| format!("Failed to create CSV log file {:?}", path))?;
        debug!("Opened CSV log file {:?}", path);
        Ok(Self {
            path,
            writer: csv::Writer::from_writer(file),
            header: None,
        })
    }

    /// Path of the CSV file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The header, once the first table has been written.
    pub fn header(&self) -> Option<&[String]> {
        self.header.as_deref()
    }

    fn write_tabular(&mut self, tabular: &TabularInput) -> Result<()> {
        if self.header.is_none() {
            if tabular.is_empty() {
                return Ok(());
            }
            let header: Vec<String> = tabular.keys().map(str::to_string).collect();
            self.writer.write_record(&header)?;
            self.header = Some(header);
        }

        let header = match &self.header {
            Some(header) => header,
            None => return Ok(()),
        };
        if let Some(key) = tabular.keys().find(|k| !header.iter().any(|h| h == k)) {
            return Err(LogbookError::TabularKeyMismatch(key.to_string()).into());
        }

        let row = header.iter().map(|k| tabular.get(k).unwrap_or(""));
        self.writer.write_record(row)?;
        self.writer.flush()?;
        Ok(())
    }
}

impl LogOutput for CsvOutput {
    fn supports_text(&self) -> bool {
        false
    }

    fn supports_tabular(&self) -> bool {
        true
    }

    fn log(&mut self, payload: &LogPayload<'_>, _prefix: &str, _options: &LogOptions) -> Result<()> {
        match payload {
            LogPayload::Tabular(tabular) => self.write_tabular(tabular),
            LogPayload::Message(_) => Ok(()),
        }
    }
}
