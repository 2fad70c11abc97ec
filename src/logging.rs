// src/logging.rs
//! Optional tracing subscriber (feature `logging`)

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::Config;

/// Install a fmt subscriber. `RUST_LOG` wins over the configured filter.
/// Safe to call more than once; later calls are no-ops.
pub fn init(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .try_init()
        .ok();
}
