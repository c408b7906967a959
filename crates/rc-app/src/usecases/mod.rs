pub mod copy_to_clipboard;
pub mod list_clipboard_formats;
pub mod paste_from_clipboard;

pub use copy_to_clipboard::CopyToClipboard;
pub use list_clipboard_formats::{ListClipboardFormats, ListingFormat};
pub use paste_from_clipboard::PasteFromClipboard;
