//! Clipboard port - abstracts system clipboard access
//!
//! The process-wide OS clipboard is injected through this trait so the
//! resolver, the transfer use cases and the listing can run against a fake.

use anyhow::Result;

use crate::clipboard::{ObservedClipboardRepresentation, SystemClipboardSnapshot};
use crate::ids::FormatId;

/// System clipboard port
///
/// Four primitive operations plus two provided compositions. Implementations
/// must report formats in the clipboard service's own priority order.
pub trait SystemClipboardPort {
    /// Formats currently on the clipboard, native order, possibly empty.
    fn available_formats(&self) -> Result<Vec<FormatId>>;

    /// Raw payload for `format`, `None` when the clipboard holds nothing under it.
    fn read_format(&self, format: &FormatId) -> Result<Option<Vec<u8>>>;

    /// Remove every format from the clipboard.
    fn clear(&self) -> Result<()>;

    /// Place `bytes` on the clipboard under `format`.
    fn write_format(&self, format: &FormatId, bytes: Vec<u8>) -> Result<()>;

    /// Read every advertised format and its payload.
    ///
    /// A payload that fails to read is recorded as missing instead of failing
    /// the whole snapshot.
    fn read_snapshot(&self) -> Result<SystemClipboardSnapshot> {
        let formats = self.available_formats()?;
        let mut representations = Vec::with_capacity(formats.len());

        for format_id in formats {
            let bytes = match self.read_format(&format_id) {
                Ok(bytes) => bytes,
                Err(err) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(format = %format_id, error = %err, "Failed to read clipboard payload");
                    #[cfg(not(feature = "tracing"))]
                    let _ = err;
                    None
                }
            };
            representations.push(ObservedClipboardRepresentation::new(format_id, bytes));
        }

        Ok(SystemClipboardSnapshot::new(representations))
    }

    /// Replace the whole clipboard with a single format.
    fn replace_with(&self, format: &FormatId, bytes: Vec<u8>) -> Result<()> {
        self.clear()?;
        self.write_format(format, bytes)
    }
}
