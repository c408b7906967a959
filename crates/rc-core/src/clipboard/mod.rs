//! Clipboard domain models.
mod error;
mod listing;
pub mod policy;
mod snapshot;

pub use error::ClipboardError;
pub use listing::ListingEntry;
pub use policy::{Direction, ResolveFormatPolicy};
pub use snapshot::{ObservedClipboardRepresentation, SystemClipboardSnapshot};
