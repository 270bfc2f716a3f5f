//! Tracing subscriber installation.

use tracing_subscriber::EnvFilter;

/// Builds the event filter: `RUST_LOG` when set and valid, otherwise
/// `default_level`.
#[must_use]
pub fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Installs a formatted subscriber as the global default.
///
/// Returns `false` when a global subscriber was already installed.
#[must_use]
pub fn init(default_level: &str) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_level))
        .try_init()
        .is_ok()
}
