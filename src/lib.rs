//! richclip library
//!
//! Command dispatch and bootstrap for the `richclip` binary. Clipboard logic
//! lives in `rc-core` (format resolution) and `rc-app` (transfer, listing).

pub mod bootstrap;
pub mod cli;
pub mod commands;

pub use cli::{Cli, Commands};
pub use commands::{report, run, Action};
