//! Dependency wiring: picks the concrete clipboard behind the port.

use std::sync::Arc;

use anyhow::Result;
use rc_core::ports::SystemClipboardPort;
use rc_platform::LocalClipboard;

pub fn build_system_clipboard() -> Result<Arc<dyn SystemClipboardPort>> {
    let clipboard = LocalClipboard::new()?;
    Ok(Arc::new(clipboard))
}
