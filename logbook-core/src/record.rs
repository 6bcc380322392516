//! Types for recording tabular metrics during training.
//!
//! A [`TabularInput`] collects the key-value rows of one reporting cycle,
//! typically one training iteration. Keys are prefixed with the active prefix
//! and values are stored as their [`Display`](std::fmt::Display) rendering.
//! At the end of the cycle the table is handed to a
//! [`Logger`](crate::Logger), then cleared.
//!
//! # Basic Usage
//!
//! ```rust
//! use logbook_core::{Placement, TabularInput};
//!
//! let mut tabular = TabularInput::new();
//! tabular.record("Iteration", 3);
//! {
//!     let mut eval = tabular.prefix("Evaluation/");
//!     eval.record_misc_stat("Return", &[1.0, 2.0, 3.0], Placement::Back);
//! }
//! assert_eq!(tabular.get("Evaluation/ReturnAverage"), Some("2"));
//! ```
//!
//! # Duplicate keys
//!
//! Recording a key that is already in the table replaces its value and keeps
//! its position. Rendering, [`TabularInput::as_map`] and CSV outputs therefore
//! always see the same, latest value.
mod stats;
mod tabular;

pub use stats::{Placement, Statistics};
pub use tabular::TabularInput;
