use std::io::Write;
use std::sync::Arc;

use rc_core::{
    clipboard::{ClipboardError, ListingEntry},
    ids::FormatId,
    ports::SystemClipboardPort,
};
use tracing::{debug, debug_span};

/// Output mode of the clipboard listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListingFormat {
    /// One format identifier per line
    #[default]
    Plain,
    /// Pretty-printed array of `{"type", "value"}` objects
    Json,
}

/// Enumerates every format on the clipboard without mutating it.
pub struct ListClipboardFormats {
    clipboard: Arc<dyn SystemClipboardPort>,
}

impl ListClipboardFormats {
    pub fn new(clipboard: Arc<dyn SystemClipboardPort>) -> Self {
        Self { clipboard }
    }

    /// Format identifiers in the clipboard's native order.
    pub fn formats(&self) -> Result<Vec<FormatId>, ClipboardError> {
        let formats = self.clipboard.available_formats()?;
        if formats.is_empty() {
            return Err(ClipboardError::Empty);
        }
        Ok(formats)
    }

    /// One [`ListingEntry`] per advertised format, payload rendered as text or base64.
    pub fn entries(&self) -> Result<Vec<ListingEntry>, ClipboardError> {
        let snapshot = self.clipboard.read_snapshot()?;
        if snapshot.is_empty() {
            return Err(ClipboardError::Empty);
        }

        debug!(
            formats = snapshot.representation_count(),
            total_size_bytes = snapshot.total_size_bytes(),
            "Captured clipboard snapshot for listing"
        );

        Ok(snapshot
            .representations
            .iter()
            .map(ListingEntry::from_representation)
            .collect())
    }

    /// Renders the listing into `sink`. Returns the number of formats listed.
    pub fn execute(
        &self,
        mode: ListingFormat,
        sink: &mut dyn Write,
    ) -> Result<usize, ClipboardError> {
        let span = debug_span!("usecase.list", ?mode);
        span.in_scope(|| {
            let count = match mode {
                ListingFormat::Plain => {
                    let formats = self.formats()?;
                    for format in &formats {
                        writeln!(sink, "{format}")?;
                    }
                    formats.len()
                }
                ListingFormat::Json => {
                    let entries = self.entries()?;
                    serde_json::to_writer_pretty(&mut *sink, &entries)
                        .map_err(std::io::Error::from)?;
                    writeln!(sink)?;
                    entries.len()
                }
            };

            sink.flush()?;
            Ok(count)
        })
    }
}
