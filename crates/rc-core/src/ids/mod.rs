//! ID type wrappers for type safety.

mod format_id;

pub use format_id::FormatId;
