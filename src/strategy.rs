//! Retrieval Strategy Module
//!
//! Network-first retrieval: race the caller's network call against the
//! configured timeout, fall back to the partition's store on failure or
//! timeout, and keep the store warm on success.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::RwLock;
use tokio::time::timeout;
use tracing::{debug, info, warn};

use crate::cache::{
    current_timestamp_ms, AdmissionFilter, CacheEntry, CacheStats, EntryStore, Response,
};
use crate::config::CacheConfig;
use crate::error::{CacheError, Result};

// == Cache Handle ==
/// Handle to one cache partition, the engine's sole request path.
///
/// Cheap to clone; clones share the same store. Multiple callers may
/// fetch concurrently for the same or different keys, each independently
/// racing network against cache (no single-flight deduplication).
#[derive(Debug, Clone)]
pub struct CacheHandle {
    /// Partition configuration, immutable after construction
    config: Arc<CacheConfig>,
    /// Admission predicate derived from the configuration
    admission: AdmissionFilter,
    /// Thread-safe entry store
    store: Arc<RwLock<EntryStore>>,
}

impl CacheHandle {
    // == Constructor ==
    /// Creates a handle for the partition described by `config`.
    ///
    /// Fails fast with `CacheError::Config` on invalid configuration;
    /// request-time operations never see configuration errors.
    pub fn new(config: CacheConfig) -> Result<Self> {
        config.validate()?;

        info!(
            cache_name = %config.cache_name,
            max_entries = config.max_entries,
            "cache partition initialized"
        );

        let store = EntryStore::new(config.max_entries, config.max_age);
        let admission = AdmissionFilter::new(config.acceptable_status_codes.clone());

        Ok(Self {
            config: Arc::new(config),
            admission,
            store: Arc::new(RwLock::new(store)),
        })
    }

    // == Fetch ==
    /// Retrieves the resource under `key`, network first.
    ///
    /// The caller-supplied `network_call` performs the actual I/O. It is
    /// raced against `network_timeout`:
    ///
    /// - Network succeeds in time: the response is admitted into the
    ///   store (if its status code passes the filter) and returned
    ///   verbatim, cached or not.
    /// - Network fails or times out: a fresh store hit is returned
    ///   instead; otherwise the original failure surfaces as a
    ///   `CacheMiss`.
    ///
    /// On timeout the pending call is detached rather than cancelled: a
    /// success arriving later is still admitted into the store, but is
    /// never delivered to this caller. The engine performs no retries.
    pub async fn fetch<F, Fut>(&self, key: &str, network_call: F) -> Result<Response>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = anyhow::Result<Response>> + Send + 'static,
    {
        let mut network = tokio::spawn(network_call());

        match timeout(self.config.network_timeout, &mut network).await {
            Ok(Ok(Ok(response))) => {
                self.admit(key, &response).await;
                Ok(response)
            }
            Ok(Ok(Err(err))) => self.fall_back(key, CacheError::Network(err)).await,
            Ok(Err(join_err)) => {
                self.fall_back(key, CacheError::Network(anyhow::Error::new(join_err)))
                    .await
            }
            Err(_) => {
                // Detach the pending call; a late success still warms the store
                let handle = self.clone();
                let late_key = key.to_string();
                tokio::spawn(async move {
                    if let Ok(Ok(response)) = network.await {
                        debug!(key = %late_key, "admitting network response that arrived after timeout");
                        handle.admit(&late_key, &response).await;
                    }
                });

                self.fall_back(key, CacheError::Timeout(self.config.network_timeout))
                    .await
            }
        }
    }

    // == Admit ==
    /// Writes a network response into the store if its status code passes
    /// the admission filter.
    async fn admit(&self, key: &str, response: &Response) {
        if !self.admission.accepts(response.status_code) {
            debug!(
                key,
                status_code = response.status_code,
                "response not admitted into cache"
            );
            return;
        }

        let mut store = self.store.write().await;
        store.put(key.to_string(), CacheEntry::new(response));
    }

    // == Fall Back ==
    /// Consults the store after a network failure or timeout.
    ///
    /// A fresh hit recovers the request; otherwise the originating error
    /// surfaces wrapped as a `CacheMiss`.
    async fn fall_back(&self, key: &str, cause: CacheError) -> Result<Response> {
        warn!(key, cause = %cause, "network retrieval failed, consulting cache");

        let mut store = self.store.write().await;
        match store.get(key) {
            Some(response) => {
                debug!(key, "serving cached response");
                Ok(response)
            }
            None => Err(CacheError::miss(key, cause)),
        }
    }

    // == Clear ==
    /// Drops every entry in the partition.
    pub async fn clear(&self) {
        let mut store = self.store.write().await;
        store.clear();
        info!(cache_name = %self.config.cache_name, "cache partition cleared");
    }

    // == Sweep Expired ==
    /// Removes every entry older than the configured maximum age.
    ///
    /// Returns the number of entries removed. Also invoked periodically
    /// by the background sweep task.
    pub async fn sweep_expired(&self) -> usize {
        let mut store = self.store.write().await;
        store.sweep_expired(current_timestamp_ms())
    }

    // == Stats ==
    /// Returns current partition statistics.
    pub async fn stats(&self) -> CacheStats {
        let store = self.store.read().await;
        store.stats()
    }

    // == Length ==
    /// Returns the current number of entries in the partition.
    pub async fn len(&self) -> usize {
        let store = self.store.read().await;
        store.len()
    }

    /// Returns true if the partition holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// The partition's configuration.
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }
}
