//! Errors in the library.
use thiserror::Error;

/// Errors in the library.
#[derive(Error, Debug, PartialEq)]
pub enum LogbookError {
    /// A configuration value was rejected, e.g. an unknown snapshot format or a zero gap.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Unknown snapshot mode.
    #[error("Unsupported snapshot mode: {0}")]
    UnsupportedMode(String),

    /// Popped a prefix from an empty prefix stack.
    #[error("Prefix stack underflow: pop without a matching push")]
    PrefixUnderflow,

    /// A table logged to a CSV output has a key not in the header.
    #[error("Tabular key not in the CSV header: {0}")]
    TabularKeyMismatch(String),
}
