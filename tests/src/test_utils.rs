//! Test utilities shared by the integration tests.

use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes test logging once per process.
///
/// Respects `RUST_LOG`; defaults to `info` so scenario phase banners are
/// visible when tests run with `--nocapture`.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init()
            .ok();
    });
}
