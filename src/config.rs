//! Typed configuration from environment variables.
//!
//! Loads once at startup, fails fast on malformed values. Command-line
//! flags override individual fields after loading.

use std::time::Duration;

use crate::error::{Error, Result};

/// Default cap on concurrently executing source reads.
const DEFAULT_MAX_IN_FLIGHT: usize = 5;

/// Default client-level timeout for HTTP sources, in seconds.
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of source reads in flight at once.
    pub max_in_flight: usize,

    /// Client-level timeout applied to each HTTP request.
    pub http_timeout: Duration,

    /// Default log level when RUST_LOG is not set.
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// In local dev, call `dotenvy::dotenv().ok()` before this.
    pub fn from_env() -> Result<Self> {
        let max_in_flight = parsed_var("WORDCOUNT_MAX_IN_FLIGHT", DEFAULT_MAX_IN_FLIGHT)?;
        if max_in_flight == 0 {
            return Err(Error::Config(
                "WORDCOUNT_MAX_IN_FLIGHT must be at least 1".to_string(),
            ));
        }

        let timeout_secs = parsed_var("WORDCOUNT_HTTP_TIMEOUT_SECS", DEFAULT_HTTP_TIMEOUT_SECS)?;

        Ok(Self {
            max_in_flight,
            http_timeout: Duration::from_secs(timeout_secs),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Read and parse an optional variable, falling back to `default` when the
/// variable is unset.
fn parsed_var<T: std::str::FromStr>(name: &str, default: T) -> Result<T> {
    match std::env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| Error::Config(format!("{name} has invalid value {raw:?}"))),
        Err(_) => Ok(default),
    }
}
