pub mod config;
pub mod tracing;
pub mod wiring;

pub use self::config::{load_config, load_config_or_default, resolve_config_path, ConfigLocation};
pub use self::tracing::init_tracing_subscriber;
pub use self::wiring::build_system_clipboard;
