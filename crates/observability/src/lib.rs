//! `stockdesk-observability`
//!
//! **Responsibility:** shared tracing/logging setup for the binaries.
//!
//! One call in `main` wires the whole stack; everything else just emits
//! `tracing` events.

/// Initialize process-wide observability (tracing/logging).
pub fn init() {
    tracing::init();
}

/// Tracing configuration (filter, JSON formatting).
pub mod tracing;
