//! `palisade-observability` — shared tracing/logging setup.
//!
//! The rule engine only *emits* tracing events (rule matches, default-allow
//! fall-throughs); installing a subscriber is the host's job. This crate
//! gives embedding hosts the one-call setup.

/// Tracing configuration (filters, layers).
pub mod tracing;

/// Initialize process-wide observability (tracing/logging).
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}
