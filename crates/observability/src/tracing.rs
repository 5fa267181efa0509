//! Tracing/logging initialization.
//!
//! Emits JSON lines so authorization decisions (`debug` level in
//! `palisade-authz`) can be collected alongside the host's own logs.

use tracing_subscriber::EnvFilter;

/// Initialize tracing/logging for the process.
///
/// Filtering defaults to `info` and is configurable via `RUST_LOG`; set
/// `RUST_LOG=palisade_authz=debug` to log individual rule matches.
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
