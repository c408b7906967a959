use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Serialize;

use super::ObservedClipboardRepresentation;
use crate::ids::FormatId;

/// Display projection of one clipboard representation.
///
/// Serialized as `{"type": ..., "value": ...}`; field order is the sorted key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingEntry {
    #[serde(rename = "type")]
    pub format_id: FormatId,
    pub value: String,
}

impl ListingEntry {
    /// UTF-8 payloads render as text, anything else as standard base64.
    /// A missing payload renders as an empty string.
    pub fn from_representation(rep: &ObservedClipboardRepresentation) -> Self {
        Self {
            format_id: rep.format_id.clone(),
            value: rep.bytes.as_deref().map(render_value).unwrap_or_default(),
        }
    }
}

fn render_value(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => STANDARD.encode(bytes),
    }
}
