//! Configuration of [`Experiment`](crate::Experiment).
use anyhow::Result;
use logbook_core::{SnapshotConfig, SnapshotFormat, SnapshotMode};
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::{Path, PathBuf},
};

/// Configuration of [`Experiment`](crate::Experiment).
///
/// Relative log file names are resolved against `log_dir`.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
#[serde(default)]
pub struct LogbookConfig {
    /// Base directory of the run's logs.
    pub log_dir: PathBuf,

    /// Whether messages and tables are printed on the console.
    pub console: bool,

    /// Text log of messages. `None` disables it.
    pub text_log_file: Option<PathBuf>,

    /// CSV log of tabular metrics. `None` disables it.
    pub tabular_log_file: Option<PathBuf>,

    /// JSON dump of the run's variant. `None` disables it.
    pub variant_log_file: Option<PathBuf>,

    /// Configuration of the snapshotter.
    pub snapshot: SnapshotConfig,
}

impl Default for LogbookConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("data/local/experiment"),
            console: true,
            text_log_file: Some(PathBuf::from("debug.log")),
            tabular_log_file: Some(PathBuf::from("progress.csv")),
            variant_log_file: Some(PathBuf::from("variant.json")),
            snapshot: SnapshotConfig::default(),
        }
    }
}

impl LogbookConfig {
    /// Logs and snapshots go to `log_dir`.
    pub fn new(log_dir: impl Into<PathBuf>) -> Self {
        let log_dir = log_dir.into();
        Self {
            snapshot: SnapshotConfig::default().snapshot_dir(log_dir.clone()),
            log_dir,
            ..Default::default()
        }
    }

    /// Sets whether the console output is used.
    pub fn console(mut self, v: bool) -> Self {
        self.console = v;
        self
    }

    /// Sets the text log file.
    pub fn text_log_file(mut self, v: Option<&str>) -> Self {
        self.text_log_file = v.map(PathBuf::from);
        self
    }

    /// Sets the CSV log file.
    pub fn tabular_log_file(mut self, v: Option<&str>) -> Self {
        self.tabular_log_file = v.map(PathBuf::from);
        self
    }

    /// Sets the variant file.
    pub fn variant_log_file(mut self, v: Option<&str>) -> Self {
        self.variant_log_file = v.map(PathBuf::from);
        self
    }

    /// Sets the snapshot directory. `None` disables snapshotting.
    pub fn snapshot_dir(mut self, v: Option<&Path>) -> Self {
        self.snapshot.snapshot_dir = v.map(Path::to_path_buf);
        self
    }

    /// Sets the retention policy of snapshots.
    pub fn snapshot_mode(mut self, v: SnapshotMode) -> Self {
        self.snapshot.mode = v;
        self
    }

    /// Sets the snapshot gap.
    pub fn snapshot_gap(mut self, v: usize) -> Self {
        self.snapshot.gap = v;
        self
    }

    /// Sets the encoding of snapshots.
    pub fn snapshot_format(mut self, v: SnapshotFormat) -> Self {
        self.snapshot.format = v;
        self
    }

    /// Constructs [`LogbookConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves [`LogbookConfig`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}
