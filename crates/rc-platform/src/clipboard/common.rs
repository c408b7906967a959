use anyhow::{anyhow, Result};
use tracing::warn;

type BackendResult<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

pub(crate) fn map_clipboard_err<T>(result: BackendResult<T>) -> Result<T> {
    result.map_err(|e| anyhow!(e))
}

/// A listed format whose payload the backend refuses to hand over is treated
/// as having no payload.
pub(crate) fn payload_or_missing(result: BackendResult<Vec<u8>>) -> Option<Vec<u8>> {
    match result {
        Ok(bytes) => Some(bytes),
        Err(err) => {
            warn!(error = %err, "Listed clipboard format has no readable payload");
            None
        }
    }
}
