//! Test logging initialization.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Filter used when neither `TEST_LOG` nor `RUST_LOG` is set.
pub const DEFAULT_TEST_FILTER: &str = "warn";

/// Filter directive for a test run: `TEST_LOG`, then `RUST_LOG`, then `"warn"`.
pub fn filter_directive() -> String {
    std::env::var("TEST_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| DEFAULT_TEST_FILTER.to_owned())
}

/// Install a subscriber that writes through the test harness capture.
///
/// Idempotent; a subscriber installed elsewhere first is left in place.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let filter = EnvFilter::try_new(filter_directive())
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_TEST_FILTER));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .with_target(false)
            .try_init()
            .ok();

        tracing::debug!("test logging initialized");
    });
}
