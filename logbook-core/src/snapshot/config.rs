//! Configuration of [`Snapshotter`](super::Snapshotter).
use crate::error::LogbookError;
use anyhow::Result;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::{
    fmt,
    fs::File,
    io::{BufReader, Read, Write},
    path::{Path, PathBuf},
    str::FromStr,
};

/// Retention policy of iteration checkpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnapshotMode {
    /// Keep a checkpoint of every iteration.
    #[default]
    All,

    /// Keep only the latest checkpoint.
    Last,

    /// Keep a checkpoint every `gap` iterations.
    Gap,

    /// Keep a checkpoint every `gap` iterations and always the latest one.
    GapAndLast,

    /// Keep nothing.
    None,
}

impl FromStr for SnapshotMode {
    type Err = LogbookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "last" => Ok(Self::Last),
            "gap" => Ok(Self::Gap),
            "gap_and_last" => Ok(Self::GapAndLast),
            "none" => Ok(Self::None),
            _ => Err(LogbookError::UnsupportedMode(s.to_string())),
        }
    }
}

impl fmt::Display for SnapshotMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::All => "all",
            Self::Last => "last",
            Self::Gap => "gap",
            Self::GapAndLast => "gap_and_last",
            Self::None => "none",
        };
        write!(f, "{}", s)
    }
}

/// Encoding of snapshot payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnapshotFormat {
    /// Compact binary encoding with `bincode`.
    #[default]
    Bincode,

    /// Pretty-printed JSON.
    Json,

    /// YAML.
    Yaml,
}

impl SnapshotFormat {
    /// File extension of the format, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Bincode => "bin",
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }

    /// Encodes `data` into `writer`.
    pub fn serialize_into<W: Write, T: Serialize + ?Sized>(&self, writer: W, data: &T) -> Result<()> {
        match self {
            Self::Bincode => bincode::serialize_into(writer, data)?,
            Self::Json => serde_json::to_writer_pretty(writer, data)?,
            Self::Yaml => serde_yaml::to_writer(writer, data)?,
        }
        Ok(())
    }

    /// Decodes a value from `reader`.
    pub fn deserialize_from<R: Read, T: DeserializeOwned>(&self, reader: R) -> Result<T> {
        let data = match self {
            Self::Bincode => bincode::deserialize_from(reader)?,
            Self::Json => serde_json::from_reader(reader)?,
            Self::Yaml => serde_yaml::from_reader(reader)?,
        };
        Ok(data)
    }
}

impl FromStr for SnapshotFormat {
    type Err = LogbookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bincode" => Ok(Self::Bincode),
            "json" => Ok(Self::Json),
            "yaml" => Ok(Self::Yaml),
            _ => Err(LogbookError::InvalidConfiguration(format!(
                "unsupported snapshot format: {}",
                s
            ))),
        }
    }
}

/// Configuration of [`Snapshotter`](super::Snapshotter).
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
#[serde(default)]
pub struct SnapshotConfig {
    /// Where checkpoints are written. `None` disables snapshotting.
    pub snapshot_dir: Option<PathBuf>,

    /// Retention policy.
    pub mode: SnapshotMode,

    /// Interval of kept checkpoints in iterations, used by the gap modes.
    pub gap: usize,

    /// Encoding of iteration checkpoints.
    pub format: SnapshotFormat,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            snapshot_dir: None,
            mode: SnapshotMode::All,
            gap: 1,
            format: SnapshotFormat::Bincode,
        }
    }
}

impl SnapshotConfig {
    /// Sets the snapshot directory.
    pub fn snapshot_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.snapshot_dir = Some(dir.into());
        self
    }

    /// Sets the retention policy.
    pub fn mode(mut self, mode: SnapshotMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the gap.
    pub fn gap(mut self, gap: usize) -> Self {
        self.gap = gap;
        self
    }

    /// Sets the encoding of checkpoints.
    pub fn format(mut self, format: SnapshotFormat) -> Self {
        self.format = format;
        self
    }

    /// Constructs [`SnapshotConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves [`SnapshotConfig`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}
