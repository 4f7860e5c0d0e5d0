//! Tunable constants for the patterns, loaded from TOML.
//!
//! ```toml
//! [proxy]
//! cache_duration_ms = 5000
//! rate_window_ms = 10000
//! max_requests = 10
//! fetch_latency_ms = 1000
//!
//! [observer]
//! alert_threshold = 100.0
//! ```
//!
//! Every key is optional; anything missing keeps its default.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub proxy: ProxyConfig,
    pub observer: ObserverConfig,
}

impl Config {
    pub fn from_toml_str(input: &str) -> Result<Self> {
        Ok(toml::from_str(input)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| Error::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&contents)?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProxyConfig {
    /// Age at which a cached value stops being served.
    pub cache_duration_ms: u64,
    /// Length of the trailing window the rate limit counts over.
    pub rate_window_ms: u64,
    /// Requests allowed inside one window before the proxy refuses.
    pub max_requests: usize,
    /// Simulated latency of the real data service.
    pub fetch_latency_ms: u64,
}

impl ProxyConfig {
    pub fn cache_duration(&self) -> Duration {
        Duration::from_millis(self.cache_duration_ms)
    }

    pub fn rate_window(&self) -> Duration {
        Duration::from_millis(self.rate_window_ms)
    }

    pub fn fetch_latency(&self) -> Duration {
        Duration::from_millis(self.fetch_latency_ms)
    }
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            cache_duration_ms: 5_000,
            rate_window_ms: 10_000,
            max_requests: 10,
            fetch_latency_ms: 1_000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ObserverConfig {
    /// Prices strictly above this trigger a `PriceAlert`.
    pub alert_threshold: f64,
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            alert_threshold: 100.0,
        }
    }
}
