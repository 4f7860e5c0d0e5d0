use std::path::PathBuf;

use thiserror::Error;

/// Every failure a pattern in this crate can report.
///
/// Only two patterns can fail at all: the proxy refuses requests once its
/// sliding window is full, and a payment context refuses to pay before a
/// strategy has been chosen. Nothing retries internally.
#[derive(Error, Debug)]
pub enum Error {
    #[error("too many requests: {recent} in the current window (limit {limit}), try again later")]
    TooManyRequests { recent: usize, limit: usize },

    #[error("no payment strategy selected")]
    NoStrategySelected,

    #[error("failed to read config file {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl Error {
    pub fn too_many_requests(recent: usize, limit: usize) -> Self {
        Self::TooManyRequests { recent, limit }
    }

    /// Whether the caller can reasonably try the same call again later.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::TooManyRequests { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
