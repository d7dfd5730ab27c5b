//! Eviction Policy Module
//!
//! Enforces the per-partition entry capacity (least-recently-used discard)
//! and the maximum entry age.

use std::collections::HashMap;
use std::time::Duration;

use crate::cache::CacheEntry;

// == Eviction Policy ==
/// Capacity and age limits applied to a partition's entry map.
///
/// LRU order is derived from each entry's `last_accessed_at`; ties on
/// equal timestamps are broken by the lexicographically smallest key so
/// eviction is deterministic.
#[derive(Debug, Clone)]
pub struct EvictionPolicy {
    /// Maximum number of entries allowed in the partition
    max_entries: usize,
    /// Maximum entry age; zero disables age expiration
    max_age: Duration,
}

impl EvictionPolicy {
    // == Constructor ==
    /// Creates a policy with the given capacity and age limits.
    pub fn new(max_entries: usize, max_age: Duration) -> Self {
        Self {
            max_entries,
            max_age,
        }
    }

    /// Maximum entry age; zero disables age expiration.
    pub fn max_age(&self) -> Duration {
        self.max_age
    }

    // == After Insert ==
    /// Discards least-recently-used entries until the map is within capacity.
    ///
    /// Returns the evicted keys. A map within capacity is a no-op; this
    /// never fails.
    pub fn after_insert(&self, entries: &mut HashMap<String, CacheEntry>) -> Vec<String> {
        let mut evicted = Vec::new();

        while entries.len() > self.max_entries {
            let victim = entries
                .iter()
                .min_by(|(key_a, entry_a), (key_b, entry_b)| {
                    entry_a
                        .last_accessed_at
                        .cmp(&entry_b.last_accessed_at)
                        .then_with(|| key_a.cmp(key_b))
                })
                .map(|(key, _)| key.clone());

            match victim {
                Some(key) => {
                    entries.remove(&key);
                    evicted.push(key);
                }
                None => break,
            }
        }

        evicted
    }

    // == Sweep Expired ==
    /// Removes every entry whose age at `now` exceeds the maximum.
    ///
    /// Returns the number of entries removed. With a zero `max_age` this
    /// is always a no-op.
    pub fn sweep_expired(&self, entries: &mut HashMap<String, CacheEntry>, now: u64) -> usize {
        if self.max_age.is_zero() {
            return 0;
        }

        let expired_keys: Vec<String> = entries
            .iter()
            .filter(|(_, entry)| entry.is_expired(self.max_age, now))
            .map(|(key, _)| key.clone())
            .collect();

        let count = expired_keys.len();

        for key in expired_keys {
            entries.remove(&key);
        }

        count
    }
}
