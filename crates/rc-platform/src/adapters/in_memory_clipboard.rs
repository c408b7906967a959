use anyhow::Result;
use rc_core::ids::FormatId;
use rc_core::ports::SystemClipboardPort;
use std::cell::RefCell;

/// In-memory clipboard with system clipboard semantics.
///
/// Formats keep insertion order, which stands in for the platform priority
/// order. Writing an existing format replaces its payload in place.
#[derive(Debug, Default)]
pub struct InMemoryClipboard {
    entries: RefCell<Vec<(FormatId, Vec<u8>)>>,
}

impl InMemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the clipboard with several formats at once, in priority order.
    pub fn with_formats<I, F, B>(formats: I) -> Self
    where
        I: IntoIterator<Item = (F, B)>,
        F: Into<FormatId>,
        B: Into<Vec<u8>>,
    {
        let entries = formats
            .into_iter()
            .map(|(format, bytes)| (format.into(), bytes.into()))
            .collect();
        Self {
            entries: RefCell::new(entries),
        }
    }

    /// Current contents, in priority order.
    pub fn entries(&self) -> Vec<(FormatId, Vec<u8>)> {
        self.entries.borrow().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl SystemClipboardPort for InMemoryClipboard {
    fn available_formats(&self) -> Result<Vec<FormatId>> {
        Ok(self
            .entries
            .borrow()
            .iter()
            .map(|(format, _)| format.clone())
            .collect())
    }

    fn read_format(&self, format: &FormatId) -> Result<Option<Vec<u8>>> {
        Ok(self
            .entries
            .borrow()
            .iter()
            .find(|(id, _)| id == format)
            .map(|(_, bytes)| bytes.clone()))
    }

    fn clear(&self) -> Result<()> {
        self.entries.borrow_mut().clear();
        Ok(())
    }

    fn write_format(&self, format: &FormatId, bytes: Vec<u8>) -> Result<()> {
        let mut entries = self.entries.borrow_mut();
        match entries.iter_mut().find(|(id, _)| id == format) {
            Some((_, existing)) => *existing = bytes,
            None => entries.push((format.clone(), bytes)),
        }
        Ok(())
    }
}
