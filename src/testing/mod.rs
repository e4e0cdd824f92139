//! Testing utilities
//!
//! Helpers shared by unit and integration tests.

use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber that writes through the test harness
///
/// Honors `RUST_LOG`, defaulting to `debug` for this crate. Safe to call
/// from every test; only the first call installs the subscriber.
pub fn init_test_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("infogata_utils=debug"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
