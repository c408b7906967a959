//! Tracing configuration for richclip
//!
//! Standard output carries clipboard payloads, so every log line goes to
//! standard error.

use anyhow::Context;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Build the filter: `RUST_LOG` when set, otherwise `default_directives`.
fn build_env_filter(default_directives: &str) -> anyhow::Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(default_directives)
            .with_context(|| format!("Invalid log level directive: {default_directives}")),
    }
}

/// Initialize the tracing subscriber
///
/// ## Errors / 错误
///
/// Returns `Err` if:
/// - Subscriber is already registered (should only call once)
/// - `default_directives` is not a valid filter and `RUST_LOG` is unset
pub fn init_tracing_subscriber(default_directives: &str) -> anyhow::Result<()> {
    let env_filter = build_env_filter(default_directives)?;

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_ansi(false),
        )
        .try_init()
        .context("Failed to initialize tracing subscriber")
}
