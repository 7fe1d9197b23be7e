//! Logging setup for the walker binaries and tests.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Filter used when `RUST_LOG` is unset or unparsable.
///
/// Each walker crate is named so per-frame `debug!` output from the scene
/// crate can be silenced without touching the rest.
pub const DEFAULT_FILTER: &str =
    "info,walker=debug,walker_core=debug,walker_scene=debug,walker_platform=debug,winit=warn";

/// Install a compact `tracing` subscriber filtered by `RUST_LOG`.
///
/// Calling this a second time keeps the first subscriber and logs a warning
/// through it.
///
/// # Example
/// ```no_run
/// walker_core::init_logging();
/// tracing::info!("Walker initialized");
/// ```
pub fn init_logging() {
    let (filter, from_env) = match EnvFilter::try_from_default_env() {
        Ok(filter) => (filter, true),
        Err(_) => (EnvFilter::new(DEFAULT_FILTER), false),
    };

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_target(true))
        .try_init();

    match installed {
        Ok(()) => tracing::debug!(from_env, "Logging initialized"),
        Err(e) => tracing::warn!("Logging already initialized: {}", e),
    }
}
