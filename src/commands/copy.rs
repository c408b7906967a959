use std::io::Read;
use std::sync::Arc;

use rc_app::CopyToClipboard;
use rc_core::{
    ports::SystemClipboardPort, AppConfig, ClipboardError, FormatId, ResolveFormatPolicy,
};

pub(super) fn run(
    clipboard: Arc<dyn SystemClipboardPort>,
    config: &AppConfig,
    explicit: Option<FormatId>,
    stdin: &mut dyn Read,
) -> Result<(), ClipboardError> {
    let policy = ResolveFormatPolicy::from_config(config);
    let format = CopyToClipboard::new(clipboard, policy).execute(explicit, stdin)?;
    tracing::info!(format = %format, "Copied to clipboard");
    Ok(())
}
