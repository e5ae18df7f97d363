// Shared test utilities

#![allow(dead_code)]

use std::sync::Once;

static TRACING: Once = Once::new();

/// Installs the tracing subscriber once per test binary.
///
/// Honors RUST_LOG; defaults to warn so test output stays readable.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}
