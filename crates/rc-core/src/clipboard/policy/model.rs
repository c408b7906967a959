/// Which way data moves for the operation being resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// `paste`, `list`, implicit paste: the clipboard is the source.
    Read,
    /// `copy`, implicit copy: the clipboard is the destination.
    Write,
}
