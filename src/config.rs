//! Configuration Module
//!
//! Per-partition configuration for the caching engine.

use std::collections::HashSet;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{CacheError, Result};

// == Defaults ==
/// Default partition name.
pub const DEFAULT_CACHE_NAME: &str = "https-calls";

/// Default bound on the network race.
pub const DEFAULT_NETWORK_TIMEOUT: Duration = Duration::from_secs(15);

/// Default maximum number of entries per partition.
pub const DEFAULT_MAX_ENTRIES: usize = 150;

/// Default maximum entry age (one month).
pub const DEFAULT_MAX_AGE: Duration = Duration::from_secs(30 * 24 * 60 * 60);

/// Default background sweep cadence.
pub const DEFAULT_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

/// Configuration for a single cache partition.
///
/// Immutable once a handle is constructed. Each partition gets its own
/// independently sized store; partitions are identified by `cache_name`.
///
/// All values have defaults matching a network-first offline cache:
/// a 15 second network timeout, 150 entries, a one month maximum age,
/// and admission limited to status codes 0 (opaque success) and 200.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Logical partition identifier, unique per partition
    pub cache_name: String,
    /// Duration bound on the network race; must be > 0
    pub network_timeout: Duration,
    /// Maximum number of entries the partition can hold; must be >= 1
    pub max_entries: usize,
    /// Age after which an entry is stale regardless of access.
    /// A zero duration means entries never expire by age.
    pub max_age: Duration,
    /// Status codes eligible for admission into the store
    pub acceptable_status_codes: HashSet<u16>,
    /// Interval between background expiration sweeps; must be > 0
    pub sweep_interval: Duration,
}

impl CacheConfig {
    /// Creates a configuration with default policies for the given partition name.
    pub fn new(cache_name: impl Into<String>) -> Self {
        Self {
            cache_name: cache_name.into(),
            ..Self::default()
        }
    }

    /// Validates the configuration.
    ///
    /// Called by `CacheHandle::new`; invalid configuration fails at
    /// construction time, never at request time.
    pub fn validate(&self) -> Result<()> {
        if self.cache_name.is_empty() {
            return Err(CacheError::Config("cache_name must not be empty".to_string()));
        }
        if self.network_timeout.is_zero() {
            return Err(CacheError::Config("network_timeout must be > 0".to_string()));
        }
        if self.max_entries < 1 {
            return Err(CacheError::Config("max_entries must be >= 1".to_string()));
        }
        if self.acceptable_status_codes.is_empty() {
            return Err(CacheError::Config(
                "acceptable_status_codes must not be empty".to_string(),
            ));
        }
        if self.sweep_interval.is_zero() {
            return Err(CacheError::Config("sweep_interval must be > 0".to_string()));
        }
        Ok(())
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            cache_name: DEFAULT_CACHE_NAME.to_string(),
            network_timeout: DEFAULT_NETWORK_TIMEOUT,
            max_entries: DEFAULT_MAX_ENTRIES,
            max_age: DEFAULT_MAX_AGE,
            acceptable_status_codes: HashSet::from([0, 200]),
            sweep_interval: DEFAULT_SWEEP_INTERVAL,
        }
    }
}
