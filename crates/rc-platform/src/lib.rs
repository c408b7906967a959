//! # rc-platform
//!
//! Implementations of the `rc-core` ports: the real system clipboard and an
//! in-memory clipboard with the same ordering semantics.

pub mod adapters;
pub mod clipboard;

pub use adapters::InMemoryClipboard;
pub use clipboard::LocalClipboard;
