//! Tracing setup for the aliasd binary
//!
//! Usage:
//!   aliasd --debug ...             # Debug logging to console
//!   RUST_LOG=aliasd_server=debug   # Fine-grained log control
//!
//! Environment variables:
//!   RUST_LOG                       # Log filter (default: info)

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Logging options taken from the command line
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// `--debug`: log at debug level when RUST_LOG is unset
    pub debug: bool,
}

impl TracingConfig {
    fn default_level(&self) -> &'static str {
        if self.debug {
            "debug"
        } else {
            "info"
        }
    }
}

/// Install the console subscriber for aliasd.
///
/// RUST_LOG wins over `--debug`; module targets are only printed in debug mode.
pub fn init(config: &TracingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_level()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.debug)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}
