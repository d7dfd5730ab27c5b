//! Cache Module
//!
//! Per-partition storage with admission filtering, LRU capacity
//! enforcement and age expiration.

mod admission;
mod entry;
mod eviction;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use admission::AdmissionFilter;
pub use entry::{current_timestamp_ms, CacheEntry, Response};
pub use eviction::EvictionPolicy;
pub use stats::CacheStats;
pub use store::EntryStore;
