use super::{SnapshotConfig, SnapshotFormat, SnapshotMode};
use crate::error::LogbookError;
use anyhow::{Context, Result};
use log::{debug, info};
use serde::{de::DeserializeOwned, Serialize};
use std::{
    fs::{self, File},
    io::{BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

/// Name of the checkpoint overwritten by the `last` modes.
pub const LAST_FILE_NAME: &str = "params.ckpt";

/// Default base name of [`Snapshotter::save_extra_data`].
pub const DEFAULT_EXTRA_DATA_NAME: &str = "extra_data";

/// Name of the checkpoint of iteration `itr`.
pub fn itr_file_name(itr: usize) -> String {
    format!("itr_{}.ckpt", itr)
}

/// Writes checkpoints according to a [`SnapshotMode`].
///
/// Iterations are unsigned, so the gap modes never see a negative iteration.
/// Writes are not atomic: a crash in the middle of a write can leave a
/// truncated file behind.
#[derive(Debug, Clone)]
pub struct Snapshotter {
    dir: Option<PathBuf>,
    mode: SnapshotMode,
    gap: usize,
    format: SnapshotFormat,
}

impl Default for Snapshotter {
    fn default() -> Self {
        Self {
            dir: None,
            mode: SnapshotMode::All,
            gap: 1,
            format: SnapshotFormat::Bincode,
        }
    }
}

impl Snapshotter {
    /// Constructs a snapshotter.
    ///
    /// Creates the snapshot directory if it is set and doesn't exist.
    ///
    /// # Errors
    ///
    /// Fails with [`LogbookError::InvalidConfiguration`] if `config.gap` is zero.
    pub fn new(config: SnapshotConfig) -> Result<Self> {
        let mut snapshotter = Self {
            mode: config.mode,
            format: config.format,
            ..Default::default()
        };
        snapshotter.set_snapshot_gap(config.gap)?;
        if let Some(dir) = config.snapshot_dir {
            snapshotter.set_snapshot_dir(dir)?;
        }
        Ok(snapshotter)
    }

    /// Constructs a snapshotter without a directory, which writes nothing.
    pub fn disabled() -> Self {
        Self::default()
    }

    /// The snapshot directory.
    pub fn snapshot_dir(&self) -> Option<&Path> {
        self.dir.as_deref()
    }

    /// Sets the snapshot directory, creating it if needed.
    ///
    /// An empty path disables snapshotting.
    pub fn set_snapshot_dir(&mut self, dir: impl Into<PathBuf>) -> Result<()> {
        let dir = dir.into();
        if dir.as_os_str().is_empty() {
            self.dir = None;
            return Ok(());
        }
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create snapshot directory {:?}", dir))?;
        self.dir = Some(dir);
        Ok(())
    }

    /// Disables snapshotting.
    pub fn unset_snapshot_dir(&mut self) {
        self.dir = None;
    }

    /// The retention policy.
    pub fn snapshot_mode(&self) -> SnapshotMode {
        self.mode
    }

    /// Sets the retention policy.
    pub fn set_snapshot_mode(&mut self, mode: SnapshotMode) {
        self.mode = mode;
    }

    /// The gap of the gap modes.
    pub fn snapshot_gap(&self) -> usize {
        self.gap
    }

    /// Sets the gap of the gap modes.
    ///
    /// # Errors
    ///
    /// Fails with [`LogbookError::InvalidConfiguration`] if `gap` is zero.
    pub fn set_snapshot_gap(&mut self, gap: usize) -> Result<()> {
        if gap == 0 {
            return Err(LogbookError::InvalidConfiguration(
                "snapshot gap must be positive".to_string(),
            )
            .into());
        }
        self.gap = gap;
        Ok(())
    }

    /// The encoding of iteration checkpoints.
    pub fn snapshot_format(&self) -> SnapshotFormat {
        self.format
    }

    /// Sets the encoding of iteration checkpoints.
    pub fn set_snapshot_format(&mut self, format: SnapshotFormat) {
        self.format = format;
    }

    /// Writes `data` to `<dir>/<file_name>`, replacing any previous content.
    ///
    /// The extension of `format` is appended when `file_name` has none.
    /// Returns the written path, or `None` when snapshotting is disabled.
    pub fn save_extra_data<T: Serialize + ?Sized>(
        &self,
        data: &T,
        file_name: &str,
        format: SnapshotFormat,
    ) -> Result<Option<PathBuf>> {
        let dir = match &self.dir {
            Some(dir) => dir,
            None => return Ok(None),
        };

        let mut path = dir.join(file_name);
        if path.extension().is_none() {
            path.set_extension(format.extension());
        }
        write_file(&path, data, format)?;
        info!("Saved extra data in {:?}", path);
        Ok(Some(path))
    }

    /// Same as [`Snapshotter::save_extra_data`] with the format given by name.
    ///
    /// # Errors
    ///
    /// An unknown format fails with [`LogbookError::InvalidConfiguration`]
    /// before anything is written, even when snapshotting is disabled.
    pub fn save_extra_data_as<T: Serialize + ?Sized>(
        &self,
        data: &T,
        file_name: &str,
        format: &str,
    ) -> Result<Option<PathBuf>> {
        let format = format.parse::<SnapshotFormat>()?;
        self.save_extra_data(data, file_name, format)
    }

    /// Saves the parameters of iteration `itr` according to the retention policy.
    ///
    /// Returns the paths written by this call, empty when the policy skips
    /// the iteration or snapshotting is disabled.
    pub fn save_itr_params<T: Serialize + ?Sized>(&self, itr: usize, params: &T) -> Result<Vec<PathBuf>> {
        let dir = match &self.dir {
            Some(dir) => dir,
            None => return Ok(vec![]),
        };

        let mut file_names = vec![];
        match self.mode {
            SnapshotMode::All => file_names.push(itr_file_name(itr)),
            SnapshotMode::Last => file_names.push(LAST_FILE_NAME.to_string()),
            SnapshotMode::Gap => {
                if itr % self.gap == 0 {
                    file_names.push(itr_file_name(itr));
                }
            }
            SnapshotMode::GapAndLast => {
                if itr % self.gap == 0 {
                    file_names.push(itr_file_name(itr));
                }
                file_names.push(LAST_FILE_NAME.to_string());
            }
            SnapshotMode::None => {}
        }

        let mut paths = Vec::with_capacity(file_names.len());
        for file_name in file_names {
            let path = dir.join(file_name);
            write_file(&path, params, self.format)?;
            info!("Saved the params of iteration {} in {:?}", itr, path);
            paths.push(path);
        }
        if paths.is_empty() {
            debug!("Skipped snapshot of iteration {} ({} mode)", itr, self.mode);
        }
        Ok(paths)
    }

    /// Reads a checkpoint written with `format`.
    pub fn load_params<T: DeserializeOwned>(path: impl AsRef<Path>, format: SnapshotFormat) -> Result<T> {
        let path = path.as_ref();
        let file = File::open(path).with_context(|| format!("Failed to open snapshot {:?}", path))?;
        format.deserialize_from(BufReader::new(file))
    }

    /// Reads the checkpoint of iteration `itr`, if it exists.
    pub fn load_itr_params<T: DeserializeOwned>(&self, itr: usize) -> Result<Option<T>> {
        self.load_existing(&itr_file_name(itr))
    }

    /// Reads the checkpoint written by the `last` modes, if it exists.
    pub fn load_last_params<T: DeserializeOwned>(&self) -> Result<Option<T>> {
        self.load_existing(LAST_FILE_NAME)
    }

    fn load_existing<T: DeserializeOwned>(&self, file_name: &str) -> Result<Option<T>> {
        let path = match &self.dir {
            Some(dir) => dir.join(file_name),
            None => return Ok(None),
        };
        if !path.exists() {
            return Ok(None);
        }
        Self::load_params(&path, self.format).map(Some)
    }
}

fn write_file<T: Serialize + ?Sized>(path: &Path, data: &T, format: SnapshotFormat) -> Result<()> {
    let file = File::create(path).with_context(|| format!("Failed to create snapshot {:?}", path))?;
    let mut writer = BufWriter::new(file);
    format.serialize_into(&mut writer, data)?;
    writer.flush()?;
    Ok(())
}
