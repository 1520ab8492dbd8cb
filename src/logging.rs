//! Tracing subscriber setup.
//!
//! `RUST_LOG` overrides the default filter, e.g.
//! `RUST_LOG=archboard::store=debug`.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "archboard=info";

/// Install the global fmt subscriber. Safe to call more than once; later
/// calls are ignored.
pub fn init() {
    init_with_default(DEFAULT_FILTER);
}

pub fn init_with_default(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
