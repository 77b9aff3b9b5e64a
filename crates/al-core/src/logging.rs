//! `tracing` subscriber installation.
//!
//! The library crates only emit events through the `tracing` macros; a host
//! process calls [`init_tracing`] once to see them.

use tracing_subscriber::EnvFilter;

/// Install a `fmt` subscriber filtered by `RUST_LOG`, falling back to
/// `default_filter` when the variable is unset or unparsable.
///
/// Returns `false` if a global subscriber was already installed, which makes
/// the call safe to repeat (tests call it freely).
pub fn init_tracing(default_filter: &str) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}
