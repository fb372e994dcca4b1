//! Tracing/logging initialization for the stockdesk binaries.

use tracing_subscriber::EnvFilter;

/// Install the process-wide subscriber: JSON lines on stdout, filtered by
/// `RUST_LOG` (default `info`).
///
/// Targets are omitted from the output; the API layer names its operations
/// in the event fields instead. Safe to call more than once, later calls
/// are no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false);

    // try_init so tests that spawn the app twice do not panic.
    let _ = subscriber.try_init();
}
