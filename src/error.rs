//! Error types for the caching engine
//!
//! Provides unified error handling using thiserror.

use std::time::Duration;

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the caching engine.
#[derive(Error, Debug)]
pub enum CacheError {
    /// The caller-supplied network operation failed
    #[error("Network request failed: {0}")]
    Network(#[source] anyhow::Error),

    /// The network operation did not complete within the configured timeout
    #[error("Network request timed out after {0:?}")]
    Timeout(Duration),

    /// Both the network and the cache failed to produce a response
    #[error("Cache miss for key '{key}': {source}")]
    CacheMiss {
        /// The requested resource identifier
        key: String,
        /// The network or timeout error that forced the cache lookup
        source: Box<CacheError>,
    },

    /// Invalid configuration, rejected at construction time
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl CacheError {
    /// Wraps a network or timeout error as the final cache-miss failure.
    pub(crate) fn miss(key: impl Into<String>, source: CacheError) -> Self {
        CacheError::CacheMiss {
            key: key.into(),
            source: Box::new(source),
        }
    }
}

// == Result Type Alias ==
/// Convenience Result type for the caching engine.
pub type Result<T> = std::result::Result<T, CacheError>;
