#![warn(missing_docs)]
//! Primitives for logging machine learning experiments.
//!
//! * [`TabularInput`] collects key-value metrics for one reporting cycle.
//! * [`Logger`] dispatches messages and tables to a list of [`LogOutput`]s.
//! * [`Snapshotter`] persists training state according to a [`SnapshotMode`].
//! * [`variant`] writes experiment hyper-parameters as sorted JSON.
pub mod error;
pub mod output;
pub mod record;
pub mod snapshot;
pub mod variant;

mod logger;
mod prefix;

pub use error::LogbookError;
pub use logger::Logger;
pub use output::{LogOptions, LogOutput, LogPayload, NullOutput, StdOutput, TextOutput};
pub use prefix::{PrefixGuard, PrefixStack, Prefixed};
pub use record::{Placement, TabularInput};
pub use snapshot::{SnapshotConfig, SnapshotFormat, SnapshotMode, Snapshotter};
