//! The logging context of one run.
use crate::LogbookConfig;
use anyhow::Result;
use log::info;
use logbook_core::{variant::dump_variant, Logger, Snapshotter, StdOutput, TabularInput, TextOutput};
use logbook_csv::CsvOutput;
use serde::Serialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Owns the logger, the tabular recorder and the snapshotter of a run.
///
/// The training loop holds an `Experiment` and drives all calls with its
/// iteration index; nothing is global, so several experiments can live in one
/// process.
pub struct Experiment {
    /// Messages and tables go through this logger.
    pub logger: Logger,

    /// Metrics of the current iteration.
    pub tabular: TabularInput,

    /// Checkpoints of the run.
    pub snapshotter: Snapshotter,

    log_dir: PathBuf,
    variant_log_file: Option<PathBuf>,
}

impl Experiment {
    /// Builds the outputs and the snapshotter described by `config`.
    pub fn from_config(config: &LogbookConfig) -> Result<Self> {
        // Validated before any sink truncates the previous run's files.
        let snapshotter = Snapshotter::new(config.snapshot.clone())?;
        fs::create_dir_all(&config.log_dir)?;

        let mut logger = Logger::new();
        if config.console {
            logger.add_output(Box::new(StdOutput::new()));
        }
        if let Some(file_name) = &config.text_log_file {
            logger.add_output(Box::new(TextOutput::new(&config.log_dir, file_name)?));
        }
        if let Some(file_name) = &config.tabular_log_file {
            logger.add_output(Box::new(CsvOutput::new(&config.log_dir, file_name)?));
        }
        info!(
            "Logging to {:?} with {} outputs, snapshot mode {}",
            config.log_dir,
            logger.n_outputs(),
            snapshotter.snapshot_mode()
        );

        Ok(Self {
            logger,
            tabular: TabularInput::new(),
            snapshotter,
            log_dir: config.log_dir.clone(),
            variant_log_file: config.variant_log_file.clone(),
        })
    }

    /// Assembles an experiment from parts built by the caller.
    pub fn new(logger: Logger, snapshotter: Snapshotter, log_dir: impl Into<PathBuf>) -> Self {
        Self {
            logger,
            tabular: TabularInput::new(),
            snapshotter,
            log_dir: log_dir.into(),
            variant_log_file: None,
        }
    }

    /// Base directory of the run's logs.
    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    /// Logs the tabular metrics of the current cycle, then clears them.
    pub fn dump_tabular(&mut self) -> Result<()> {
        self.logger.log_tabular(&self.tabular)?;
        self.tabular.clear();
        Ok(())
    }

    /// Writes the variant of the run, if a variant file is configured.
    pub fn log_variant<T: Serialize + ?Sized>(&self, variant: &T) -> Result<Option<PathBuf>> {
        match &self.variant_log_file {
            Some(file_name) => {
                let path = self.log_dir.join(file_name);
                dump_variant(&path, variant)?;
                info!("Saved the variant in {:?}", path);
                Ok(Some(path))
            }
            None => Ok(None),
        }
    }
}
