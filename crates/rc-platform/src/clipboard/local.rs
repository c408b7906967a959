use super::common::{map_clipboard_err, payload_or_missing};
use anyhow::{Context, Result};
use clipboard_rs::{Clipboard, ClipboardContext};
use rc_core::ids::FormatId;
use rc_core::ports::SystemClipboardPort;
use tracing::{debug, debug_span};

/// System clipboard implementation using clipboard-rs
///
/// Format identifiers are passed through untouched: UTIs on macOS, target
/// atoms / MIME types on X11, registered format names on Windows.
pub struct LocalClipboard {
    ctx: ClipboardContext,
}

impl LocalClipboard {
    pub fn new() -> Result<Self> {
        let ctx = map_clipboard_err(ClipboardContext::new())
            .context("Failed to create clipboard context")?;
        Ok(Self { ctx })
    }
}

impl SystemClipboardPort for LocalClipboard {
    fn available_formats(&self) -> Result<Vec<FormatId>> {
        let span = debug_span!("platform.clipboard.available_formats");
        span.in_scope(|| {
            let formats = map_clipboard_err(self.ctx.available_formats())
                .context("Failed to enumerate clipboard formats")?;

            debug!(count = formats.len(), "Enumerated clipboard formats");
            Ok(formats.into_iter().map(FormatId::from).collect())
        })
    }

    fn read_format(&self, format: &FormatId) -> Result<Option<Vec<u8>>> {
        let span = debug_span!("platform.clipboard.read_format", format = %format);
        span.in_scope(|| {
            // get_buffer reports an absent format as an error; tell the two apart up front
            if !self.available_formats()?.contains(format) {
                debug!("Format not advertised by clipboard");
                return Ok(None);
            }

            let bytes = payload_or_missing(self.ctx.get_buffer(format.as_str()));
            if let Some(bytes) = &bytes {
                debug!(size_bytes = bytes.len(), "Read clipboard payload");
            }
            Ok(bytes)
        })
    }

    fn clear(&self) -> Result<()> {
        map_clipboard_err(self.ctx.clear()).context("Failed to clear clipboard")
    }

    fn write_format(&self, format: &FormatId, bytes: Vec<u8>) -> Result<()> {
        let span = debug_span!(
            "platform.clipboard.write_format",
            format = %format,
            size_bytes = bytes.len(),
        );
        span.in_scope(|| {
            map_clipboard_err(self.ctx.set_buffer(format.as_str(), bytes))
                .with_context(|| format!("Failed to write clipboard format '{format}'"))?;

            debug!("Wrote clipboard payload to system");
            Ok(())
        })
    }
}
