pub mod builders;
pub mod fake_executor;

use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt};

static INIT: Once = Once::new();

/// Route planner logs into the test harness's captured output.
///
/// Filter with `MMAKE_LOG`; defaults to `debug` for this crate only.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(mmake::logging::LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new("mmake=debug"));

        let _ = fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// Turn string literals into owned command/target lists.
pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
