pub mod builders;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt};

/// Route `gerror`'s tracing events into the test harness.
///
/// Directives come from `RUST_LOG` (e.g. `RUST_LOG=gerror=trace`), falling
/// back to `info`. Output goes through `with_test_writer()`, so it only shows
/// for failing tests or under `--nocapture`. Every test may call this; only
/// the first call in a test binary installs the subscriber.
pub fn init_tracing() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    // A subscriber is already installed after the first call.
    let _ = fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .with_target(true)
        .try_init();
}
