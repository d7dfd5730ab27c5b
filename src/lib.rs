//! Offline Cache - a client-side resource caching engine
//!
//! Keeps applications working under intermittent or slow connectivity:
//! network-first retrieval with a timeout fallback to a local store,
//! LRU capacity eviction, age expiration, and admission filtering.
//!
//! Each [`CacheHandle`] owns one independently configured partition.
//! [`augment_precache_manifest`] is the build-time companion for
//! assembling the list of always-available resources.

pub mod cache;
pub mod config;
pub mod error;
pub mod manifest;
pub mod strategy;
pub mod tasks;

pub use cache::{CacheStats, Response};
pub use config::CacheConfig;
pub use error::{CacheError, Result};
pub use manifest::{augment_precache_manifest, ManifestAugmenter};
pub use strategy::CacheHandle;
pub use tasks::spawn_sweep_task;
