use crate::ids::FormatId;

/// Terminal failures of a single clipboard invocation.
///
/// Display strings are user-facing and fixed; the binary prefixes them with `Error: `.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    /// No formats present when a read was requested.
    #[error("Clipboard is empty")]
    Empty,

    /// The resolved format has no payload on the clipboard.
    #[error("No data found for type '{0}'")]
    FormatNotFound(FormatId),

    /// Standard input/output stream failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Clipboard service failure, not classified further.
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}
