//! Tracing setup: subscriber initialisation and span constructors.

pub mod spans;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use continuum_core::config::ObservabilityConfig;

/// Env var consulted before the configured level.
pub const LOG_ENV: &str = "CONTINUUM_LOG";

/// Initialise the global subscriber from configuration.
///
/// `CONTINUUM_LOG` (an `EnvFilter` directive) wins over `log_level`.
/// Returns `false` if a subscriber was already installed, which makes
/// repeated calls harmless.
pub fn init_tracing(config: &ObservabilityConfig) -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);
    if config.json_logs {
        registry
            .with(fmt::layer().json().with_target(true).with_thread_ids(true))
            .try_init()
            .is_ok()
    } else {
        registry
            .with(fmt::layer().with_target(true))
            .try_init()
            .is_ok()
    }
}
