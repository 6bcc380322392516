use super::{LogOptions, LogOutput, LogPayload};
use anyhow::Result;

/// An output that ignores any payload. This struct is used just for debugging.
#[derive(Debug, Default)]
pub struct NullOutput {}

impl LogOutput for NullOutput {
    fn supports_tabular(&self) -> bool {
        true
    }

    /// Discard the given payload.
    fn log(&mut self, _payload: &LogPayload<'_>, _prefix: &str, _options: &LogOptions) -> Result<()> {
        Ok(())
    }
}
