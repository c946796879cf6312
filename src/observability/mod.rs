//! Tracing setup for embedders.
//!
//! The library only emits `tracing` events and spans; nothing is printed
//! unless the host installs a subscriber. Hosts without their own
//! subscriber can call [`init_tracing`]:
//!
//! ```no_run
//! pagescore::observability::init_tracing();
//! ```
//!
//! The filter is read from `PAGESCORE_LOG`, then `RUST_LOG`, and defaults
//! to `warn`.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const LOG_ENV_VAR: &str = "PAGESCORE_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Build the event filter from the environment
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install a stderr fmt subscriber.
///
/// Returns `false` if a global subscriber was already set, which makes
/// repeated calls harmless.
pub fn init_tracing() -> bool {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter())
        .try_init()
        .is_ok()
}
