use std::io::Read;
use std::sync::Arc;

use rc_core::{
    clipboard::{ClipboardError, Direction, ResolveFormatPolicy},
    ids::FormatId,
    ports::SystemClipboardPort,
};
use tracing::{debug, debug_span};

/// Copies a whole byte stream onto the clipboard under one format,
/// replacing everything the clipboard held before.
pub struct CopyToClipboard {
    clipboard: Arc<dyn SystemClipboardPort>,
    policy: ResolveFormatPolicy,
}

impl CopyToClipboard {
    pub fn new(clipboard: Arc<dyn SystemClipboardPort>, policy: ResolveFormatPolicy) -> Self {
        Self { clipboard, policy }
    }

    /// Reads `source` to end-of-stream, then clears the clipboard and writes the
    /// payload under the resolved format.
    ///
    /// The clipboard is untouched if reading `source` fails. Returns the format written.
    pub fn execute(
        &self,
        explicit: Option<FormatId>,
        source: &mut dyn Read,
    ) -> Result<FormatId, ClipboardError> {
        let span = debug_span!("usecase.copy", explicit = explicit.is_some());
        span.in_scope(|| {
            let format = self.policy.resolve(explicit, &[], Direction::Write)?;

            let mut bytes = Vec::new();
            source.read_to_end(&mut bytes)?;
            let size_bytes = bytes.len();

            self.clipboard.replace_with(&format, bytes)?;

            debug!(format = %format, size_bytes, "Copied stdin to clipboard");
            Ok(format)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use mockall::{mock, predicate::eq, Sequence};
    use std::io;

    mock! {
        pub Clipboard {}

        impl SystemClipboardPort for Clipboard {
            fn available_formats(&self) -> Result<Vec<FormatId>>;
            fn read_format(&self, format: &FormatId) -> Result<Option<Vec<u8>>>;
            fn clear(&self) -> Result<()>;
            fn write_format(&self, format: &FormatId, bytes: Vec<u8>) -> Result<()>;
        }
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdin closed"))
        }
    }

    #[test]
    fn copy_defaults_to_plain_text_and_never_enumerates() {
        let mut seq = Sequence::new();
        let mut clipboard = MockClipboard::new();
        clipboard.expect_available_formats().never();
        clipboard
            .expect_clear()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(()));
        clipboard
            .expect_write_format()
            .with(eq(FormatId::plain_text()), eq(b"hello".to_vec()))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));

        let uc = CopyToClipboard::new(Arc::new(clipboard), ResolveFormatPolicy::default());
        let format = uc.execute(None, &mut &b"hello"[..]).unwrap();

        assert_eq!(format, FormatId::plain_text());
    }

    #[test]
    fn copy_uses_explicit_format_without_validation() {
        let mut clipboard = MockClipboard::new();
        clipboard.expect_clear().returning(|| Ok(()));
        clipboard
            .expect_write_format()
            .with(eq(FormatId::from("com.nobody.reads.this")), eq(Vec::new()))
            .times(1)
            .returning(|_, _| Ok(()));

        let uc = CopyToClipboard::new(Arc::new(clipboard), ResolveFormatPolicy::default());
        let format = uc
            .execute(Some("com.nobody.reads.this".into()), &mut io::empty())
            .unwrap();

        assert_eq!(format, "com.nobody.reads.this");
    }

    #[test]
    fn copy_leaves_clipboard_untouched_when_input_fails() {
        let mut clipboard = MockClipboard::new();
        clipboard.expect_clear().never();
        clipboard.expect_write_format().never();

        let uc = CopyToClipboard::new(Arc::new(clipboard), ResolveFormatPolicy::default());
        let err = uc.execute(None, &mut FailingReader).unwrap_err();

        assert!(matches!(err, ClipboardError::Io(_)));
    }

    #[test]
    fn copy_surfaces_backend_failure() {
        let mut clipboard = MockClipboard::new();
        clipboard
            .expect_clear()
            .returning(|| Err(anyhow::anyhow!("pasteboard server unavailable")));

        let uc = CopyToClipboard::new(Arc::new(clipboard), ResolveFormatPolicy::default());
        let err = uc.execute(None, &mut &b"x"[..]).unwrap_err();

        assert!(matches!(err, ClipboardError::Backend(_)));
        assert_eq!(err.to_string(), "pasteboard server unavailable");
    }
}
