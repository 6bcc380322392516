//! Experiment logging for machine learning research.
//!
//! This crate bundles [`logbook_core`] and [`logbook_csv`] and adds
//! [`Experiment`], a context object owning the [`Logger`], the
//! [`TabularInput`] and the [`Snapshotter`] of one run.
//!
//! ```rust,no_run
//! use logbook::{Experiment, LogbookConfig, SnapshotMode};
//!
//! let config = LogbookConfig::new("/tmp/runs/trpo_cartpole")
//!     .snapshot_mode(SnapshotMode::GapAndLast)
//!     .snapshot_gap(10);
//! let mut exp = Experiment::from_config(&config).unwrap();
//!
//! for itr in 0..100usize {
//!     exp.logger.log_text(&format!("Iteration {}", itr)).unwrap();
//!     exp.tabular.record("Iteration", itr);
//!     exp.tabular.record_misc_stat("Return", &[1.0, 2.0], Default::default());
//!     exp.snapshotter.save_itr_params(itr, &vec![0.0f32; 4]).unwrap();
//!     exp.dump_tabular().unwrap();
//! }
//! ```
mod config;
mod experiment;

pub use config::LogbookConfig;
pub use experiment::Experiment;
pub use logbook_core::{
    error, output, record, snapshot, variant, LogOptions, LogOutput, LogPayload, LogbookError,
    Logger, NullOutput, Placement, PrefixGuard, SnapshotConfig, SnapshotFormat, SnapshotMode,
    Snapshotter, StdOutput, TabularInput, TextOutput,
};
pub use logbook_csv::CsvOutput;
