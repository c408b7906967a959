use std::io::Write;
use std::sync::Arc;

use rc_app::PasteFromClipboard;
use rc_core::{
    ports::SystemClipboardPort, AppConfig, ClipboardError, FormatId, ResolveFormatPolicy,
};

pub(super) fn run(
    clipboard: Arc<dyn SystemClipboardPort>,
    config: &AppConfig,
    explicit: Option<FormatId>,
    stdout: &mut dyn Write,
) -> Result<(), ClipboardError> {
    let policy = ResolveFormatPolicy::from_config(config);
    let format = PasteFromClipboard::new(clipboard, policy).execute(explicit, stdout)?;
    tracing::info!(format = %format, "Pasted from clipboard");
    Ok(())
}
