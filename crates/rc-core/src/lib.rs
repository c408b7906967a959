//! # rc-core
//!
//! Core domain models and business logic for richclip.
//!
//! This crate contains pure business logic without any infrastructure dependencies.
//! The system clipboard is only reachable through [`ports::SystemClipboardPort`].

pub mod clipboard;
pub mod config;
pub mod ids;
pub mod ports;

// Re-export commonly used types at the crate root
pub use clipboard::{
    ClipboardError, Direction, ListingEntry, ObservedClipboardRepresentation,
    ResolveFormatPolicy, SystemClipboardSnapshot,
};
pub use config::AppConfig;
pub use ids::FormatId;
