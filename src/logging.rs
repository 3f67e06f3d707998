// src/logging.rs

//! Logging setup for hosts that do not install their own subscriber.
//!
//! The crate logs through the `log` facade. `init_logging` installs a
//! `tracing-subscriber` formatter on stderr that also captures `log` records.
//! `RUST_LOG` overrides the default filter.

use tracing_subscriber::EnvFilter;

/// Default filter directive: debug output in debug builds, info otherwise.
pub fn default_directive() -> &'static str {
    if cfg!(debug_assertions) {
        "fragcat=debug"
    } else {
        "fragcat=info"
    }
}

/// Builds the filter from `RUST_LOG`, falling back to [`default_directive`].
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive()))
}

/// Installs the global subscriber.
///
/// Returns `false` when a subscriber was already installed, which makes it
/// safe to call from several entry points or tests.
pub fn init_logging() -> bool {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter())
        .try_init()
        .is_ok()
}
