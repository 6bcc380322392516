//! Persisting training state under a retention policy.
//!
//! A [`Snapshotter`] owns a target directory, a [`SnapshotMode`] and a gap.
//! Each call to [`Snapshotter::save_itr_params`] decides which checkpoint
//! files to write for the given iteration:
//!
//! | mode           | files written                                      |
//! |----------------|----------------------------------------------------|
//! | `all`          | `itr_<N>.ckpt`                                     |
//! | `last`         | `params.ckpt`, overwriting the previous one        |
//! | `gap`          | `itr_<N>.ckpt` if `N % gap == 0`                   |
//! | `gap_and_last` | as `gap`, and always `params.ckpt`                 |
//! | `none`         | nothing                                            |
//!
//! Without a directory the snapshotter is disabled: every save is a no-op.
//! Payloads are any [`Serialize`](serde::Serialize) value, encoded with the
//! configured [`SnapshotFormat`].
mod base;
mod config;

pub use base::{itr_file_name, Snapshotter, DEFAULT_EXTRA_DATA_NAME, LAST_FILE_NAME};
pub use config::{SnapshotConfig, SnapshotFormat, SnapshotMode};
