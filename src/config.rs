//! Configuration management for breachwatch.
//!
//! Centralizes the network settings that encode upstream service policy
//! rather than algorithmic constants, loaded from environment variables and
//! merged with command-line arguments.

use std::time::Duration;

use crate::cli::Cli;
use crate::errors::{BreachwatchError, Result};
use crate::lookup::DEFAULT_ENDPOINT;

/// Main configuration structure for breachwatch.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Network operation settings
    pub network: NetworkConfig,
}

/// Network-related configuration options
#[derive(Debug, Clone)]
pub struct NetworkConfig {
    /// Timeout for a single lookup request
    pub request_timeout: Duration,

    /// Delay between successive lookups (the free-tier spacing policy)
    pub rate_limit: Duration,

    /// Breach-lookup endpoint URL
    pub endpoint: String,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(30),
            rate_limit: Duration::from_millis(1000),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(timeout) = std::env::var("BREACHWATCH_REQUEST_TIMEOUT_SECS") {
            if let Ok(secs) = timeout.parse::<u64>() {
                config.network.request_timeout = Duration::from_secs(secs);
            }
        }

        if let Ok(delay) = std::env::var("BREACHWATCH_RATE_LIMIT_MS") {
            if let Ok(ms) = delay.parse::<u64>() {
                config.network.rate_limit = Duration::from_millis(ms);
            }
        }

        if let Ok(endpoint) = std::env::var("BREACHWATCH_ENDPOINT") {
            config.network.endpoint = endpoint;
        }

        config
    }

    /// Merge with CLI arguments, giving CLI precedence
    pub fn merge_with_cli(&mut self, cli: &Cli) {
        if let Some(ms) = cli.delay_ms {
            self.network.rate_limit = Duration::from_millis(ms);
        }

        if let Some(ref endpoint) = cli.endpoint {
            self.network.endpoint = endpoint.clone();
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.network.request_timeout.as_secs() == 0 {
            return Err(BreachwatchError::configuration(
                "network.request_timeout must be greater than 0",
            ));
        }

        if !self.network.endpoint.starts_with("http://")
            && !self.network.endpoint.starts_with("https://")
        {
            return Err(BreachwatchError::configuration(format!(
                "network.endpoint must be an http(s) URL, got '{}'",
                self.network.endpoint
            )));
        }

        Ok(())
    }
}
