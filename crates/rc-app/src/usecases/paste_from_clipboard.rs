use std::io::Write;
use std::sync::Arc;

use rc_core::{
    clipboard::{ClipboardError, Direction, ResolveFormatPolicy},
    ids::FormatId,
    ports::SystemClipboardPort,
};
use tracing::{debug, debug_span};

/// Writes the raw payload of one clipboard format to a byte stream.
pub struct PasteFromClipboard {
    clipboard: Arc<dyn SystemClipboardPort>,
    policy: ResolveFormatPolicy,
}

impl PasteFromClipboard {
    pub fn new(clipboard: Arc<dyn SystemClipboardPort>, policy: ResolveFormatPolicy) -> Self {
        Self { clipboard, policy }
    }

    /// Resolves the format to read, fetches its payload and writes it to `sink`
    /// unmodified. Returns the format that was pasted.
    ///
    /// # Errors
    ///
    /// - [`ClipboardError::Empty`] when no `explicit` format is given and the clipboard holds nothing
    /// - [`ClipboardError::FormatNotFound`] when the resolved format has no payload
    pub fn execute(
        &self,
        explicit: Option<FormatId>,
        sink: &mut dyn Write,
    ) -> Result<FormatId, ClipboardError> {
        let span = debug_span!("usecase.paste", explicit = explicit.is_some());
        span.in_scope(|| {
            // An explicit request is taken as-is; only the fallback needs the format list.
            let available = match explicit {
                Some(_) => Vec::new(),
                None => self.clipboard.available_formats()?,
            };
            let format = self.policy.resolve(explicit, &available, Direction::Read)?;

            let bytes = self
                .clipboard
                .read_format(&format)?
                .ok_or_else(|| ClipboardError::FormatNotFound(format.clone()))?;

            sink.write_all(&bytes)?;
            sink.flush()?;

            debug!(format = %format, size_bytes = bytes.len(), "Pasted clipboard to stdout");
            Ok(format)
        })
    }
}
