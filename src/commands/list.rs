use std::io::Write;
use std::sync::Arc;

use rc_app::{ListClipboardFormats, ListingFormat};
use rc_core::{ports::SystemClipboardPort, ClipboardError};

pub(super) fn run(
    clipboard: Arc<dyn SystemClipboardPort>,
    mode: ListingFormat,
    stdout: &mut dyn Write,
) -> Result<(), ClipboardError> {
    let count = ListClipboardFormats::new(clipboard).execute(mode, stdout)?;
    tracing::info!(count, "Listed clipboard formats");
    Ok(())
}
