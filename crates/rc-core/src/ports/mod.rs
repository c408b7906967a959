//! Ports: the interfaces the core consumes from the outside world.

pub mod clipboard;

pub use clipboard::SystemClipboardPort;
