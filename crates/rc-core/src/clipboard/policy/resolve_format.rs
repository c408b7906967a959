use super::model::Direction;
use crate::{clipboard::ClipboardError, config::AppConfig, ids::FormatId};

/// Decides the single format an operation acts on.
///
/// - explicit request wins, verbatim, never checked against `available`
/// - Write: the configured default type
/// - Read: the plain-text type if advertised, otherwise `available[0]`
///
/// `available` is taken in the clipboard service's priority order, not sorted.
#[derive(Debug, Clone)]
pub struct ResolveFormatPolicy {
    plain_text: FormatId,
    default_write: FormatId,
}

impl Default for ResolveFormatPolicy {
    fn default() -> Self {
        Self::new(FormatId::plain_text(), FormatId::plain_text())
    }
}

impl ResolveFormatPolicy {
    pub fn new(plain_text: FormatId, default_write: FormatId) -> Self {
        Self {
            plain_text,
            default_write,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.plain_text_type.clone(), config.default_type.clone())
    }

    pub fn resolve(
        &self,
        explicit: Option<FormatId>,
        available: &[FormatId],
        direction: Direction,
    ) -> Result<FormatId, ClipboardError> {
        if let Some(format) = explicit {
            return Ok(format);
        }

        match direction {
            Direction::Write => Ok(self.default_write.clone()),
            Direction::Read => self.select_readable(available),
        }
    }

    fn select_readable(&self, available: &[FormatId]) -> Result<FormatId, ClipboardError> {
        let first = available.first().ok_or(ClipboardError::Empty)?;

        if available.contains(&self.plain_text) {
            return Ok(self.plain_text.clone());
        }

        Ok(first.clone())
    }
}
