//! Tracing subscriber setup.
//!
//! The widgets report failures (preview load errors, clipboard denial)
//! through `tracing` rather than panicking; hosts that want the diagnostics
//! call [`init`] once at startup. Repeat calls are no-ops, so tests can call
//! it unconditionally from their helpers.
//!
//! Filtering follows the usual `RUST_LOG` conventions, defaulting to `info`.

use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

static INIT: OnceCell<()> = OnceCell::new();

/// Install the global tracing subscriber. Safe to call more than once;
/// also tolerates a subscriber already installed by the host.
pub fn init() {
    INIT.get_or_init(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    });
}
