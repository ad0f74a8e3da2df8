//! Tracing bootstrap.
//!
//! Library code only emits via `tracing`; binaries and tests that want
//! output call `init()` once. Filtering follows `RUST_LOG`.

use tracing_subscriber::EnvFilter;

/// Install the default subscriber. Safe to call more than once; later
/// calls are no-ops.
pub fn init() {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
        .is_ok();
    if installed {
        tracing::debug!("tracing initialized");
    }
}
