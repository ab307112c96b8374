//! Test logging
//!
//! Installs a `tracing-subscriber` fmt subscriber once per test binary.
//! Verbosity follows `RUST_LOG` and defaults to `warn`.

use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

static TRACING: OnceCell<()> = OnceCell::new();

/// Initializes test tracing; later calls are no-ops
pub fn init_test_tracing() {
    TRACING.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}
