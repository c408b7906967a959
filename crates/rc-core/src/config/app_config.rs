//! Application configuration domain model

use serde::{Deserialize, Serialize};

use crate::ids::FormatId;

/// Application configuration
///
/// Every key is optional in the config file; missing keys take the defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Well-known plain-text identifier preferred when reading without `--type`
    pub plain_text_type: FormatId,

    /// Identifier written by `copy` when no `--type` is given
    pub default_type: FormatId,

    /// Tracing filter directive, overridden by `RUST_LOG`
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            plain_text_type: FormatId::plain_text(),
            default_type: FormatId::plain_text(),
            log_level: "warn".to_string(),
        }
    }
}
