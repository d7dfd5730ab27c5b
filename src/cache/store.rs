//! Entry Store Module
//!
//! Per-partition key to entry mapping combining HashMap storage with
//! LRU capacity enforcement and lazy age expiration.

use std::collections::HashMap;
use std::time::Duration;

use tracing::debug;

use crate::cache::entry::current_timestamp_ms;
use crate::cache::{CacheEntry, CacheStats, EvictionPolicy, Response};

// == Entry Store ==
/// Owns the cached entries of one partition.
///
/// Every write runs the eviction policy, and every read lazily expires
/// the entry it touches, so an expired entry is never returned as a hit.
#[derive(Debug)]
pub struct EntryStore {
    /// Key to entry storage
    entries: HashMap<String, CacheEntry>,
    /// Capacity and age limits
    eviction: EvictionPolicy,
    /// Performance statistics
    stats: CacheStats,
}

impl EntryStore {
    // == Constructor ==
    /// Creates an empty store with the given capacity and age limits.
    pub fn new(max_entries: usize, max_age: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            eviction: EvictionPolicy::new(max_entries, max_age),
            stats: CacheStats::new(),
        }
    }

    // == Get ==
    /// Retrieves the response stored under `key`.
    ///
    /// A fresh hit updates the entry's `last_accessed_at`. An expired
    /// entry behaves as a miss: it is removed from the store and `None`
    /// is returned, so a second read is still a miss rather than an error.
    pub fn get(&mut self, key: &str) -> Option<Response> {
        let now = current_timestamp_ms();
        let max_age = self.eviction.max_age();

        match self.entries.get_mut(key) {
            Some(entry) if entry.is_expired(max_age, now) => {
                self.entries.remove(key);
                self.stats.record_expirations(1);
                self.stats.record_miss();
                self.stats.set_total_entries(self.entries.len());
                debug!(key, "expired entry removed on read");
                None
            }
            Some(entry) => {
                entry.touch(now);
                self.stats.record_hit();
                Some(entry.to_response())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Put ==
    /// Inserts or replaces the entry under `key`, then enforces capacity.
    ///
    /// Admission is decided by the caller; the store accepts whatever it
    /// is handed. Never fails.
    pub fn put(&mut self, key: String, entry: CacheEntry) {
        self.entries.insert(key, entry);

        let evicted = self.eviction.after_insert(&mut self.entries);
        if !evicted.is_empty() {
            self.stats.record_evictions(evicted.len() as u64);
            debug!(count = evicted.len(), "evicted least recently used entries");
        }

        self.stats.set_total_entries(self.entries.len());
    }

    // == Remove ==
    /// Removes the entry under `key`; a missing key is a no-op.
    pub fn remove(&mut self, key: &str) {
        self.entries.remove(key);
        self.stats.set_total_entries(self.entries.len());
    }

    // == Clear ==
    /// Drops every entry in the partition.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.stats.set_total_entries(0);
    }

    // == Sweep Expired ==
    /// Removes all entries whose age at `now` exceeds the maximum.
    ///
    /// Returns the number of entries removed.
    pub fn sweep_expired(&mut self, now: u64) -> usize {
        let removed = self.eviction.sweep_expired(&mut self.entries, now);
        if removed > 0 {
            self.stats.record_expirations(removed as u64);
            self.stats.set_total_entries(self.entries.len());
        }
        removed
    }

    // == Stats ==
    /// Returns current partition statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the partition holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if an entry exists under `key`, without touching it.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}
