//! # rc-app
//!
//! Use cases that move clipboard data to and from byte streams.

pub mod usecases;

pub use usecases::{CopyToClipboard, ListClipboardFormats, ListingFormat, PasteFromClipboard};
