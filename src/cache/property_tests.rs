//! Property-Based Tests for the Cache Module
//!
//! Uses proptest to verify the eviction, admission and manifest
//! correctness properties.

use proptest::prelude::*;
use std::collections::{HashMap, HashSet};
use std::time::Duration;

use crate::cache::{AdmissionFilter, CacheEntry, EntryStore, EvictionPolicy};
use crate::manifest::augment_precache_manifest;

// == Strategies ==
/// Generates resource identifiers shaped like paths.
fn key_strategy() -> impl Strategy<Value = String> {
    "/[a-z0-9_/-]{1,24}".prop_map(|s| s)
}

fn entry_with_access(last_accessed_at: u64) -> CacheEntry {
    CacheEntry {
        payload: b"body".to_vec(),
        status_code: 200,
        stored_at: last_accessed_at,
        last_accessed_at,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // For any sequence of puts exceeding capacity, the store never holds
    // more than max_entries after any insert.
    #[test]
    fn prop_capacity_never_exceeded(
        entries in prop::collection::vec((key_strategy(), any::<u64>()), 1..120),
        max_entries in 1usize..20
    ) {
        let policy = EvictionPolicy::new(max_entries, Duration::ZERO);
        let mut map: HashMap<String, CacheEntry> = HashMap::new();

        for (key, access_time) in entries {
            map.insert(key, entry_with_access(access_time));
            policy.after_insert(&mut map);
            prop_assert!(
                map.len() <= max_entries,
                "map size {} exceeds max {}",
                map.len(),
                max_entries
            );
        }
    }

    // The evicted entry is always the one with the oldest last_accessed_at,
    // ties broken by the lexicographically smallest key.
    #[test]
    fn prop_eviction_picks_oldest_then_smallest_key(
        entries in prop::collection::hash_map(key_strategy(), any::<u64>(), 2..20)
    ) {
        let capacity = entries.len() - 1;
        let policy = EvictionPolicy::new(capacity, Duration::ZERO);

        let expected_victim = entries
            .iter()
            .min_by(|(key_a, time_a), (key_b, time_b)| {
                time_a.cmp(time_b).then_with(|| key_a.cmp(key_b))
            })
            .map(|(key, _)| key.clone())
            .unwrap();

        let mut map: HashMap<String, CacheEntry> = entries
            .into_iter()
            .map(|(key, time)| (key, entry_with_access(time)))
            .collect();

        let evicted = policy.after_insert(&mut map);

        prop_assert_eq!(evicted, vec![expected_victim.clone()]);
        prop_assert!(!map.contains_key(&expected_victim));
    }

    // Admission is pure: the same status code always yields the same answer,
    // and the answer is exactly set membership.
    #[test]
    fn prop_admission_is_pure_and_total(
        acceptable in prop::collection::hash_set(any::<u16>(), 0..10),
        probes in prop::collection::vec(any::<u16>(), 1..50)
    ) {
        let filter = AdmissionFilter::new(acceptable.clone());

        for status in probes {
            let first = filter.accepts(status);
            let second = filter.accepts(status);
            prop_assert_eq!(first, second, "accepts must be stable for {}", status);
            prop_assert_eq!(first, acceptable.contains(&status));
        }
    }

    // Sweeping removes exactly the entries older than max_age and nothing else.
    #[test]
    fn prop_sweep_removes_exactly_expired(
        entries in prop::collection::hash_map(key_strategy(), 0u64..5_000, 1..20),
        max_age_ms in 1u64..5_000,
        now in 5_000u64..20_000
    ) {
        let policy = EvictionPolicy::new(usize::MAX, Duration::from_millis(max_age_ms));

        let mut map: HashMap<String, CacheEntry> = entries
            .iter()
            .map(|(key, stored_at)| (key.clone(), entry_with_access(*stored_at)))
            .collect();

        let removed = policy.sweep_expired(&mut map, now);

        let expected_removed = entries
            .values()
            .filter(|stored_at| now - **stored_at > max_age_ms)
            .count();
        prop_assert_eq!(removed, expected_removed);

        for (key, stored_at) in &entries {
            prop_assert_eq!(map.contains_key(key), now - stored_at <= max_age_ms);
        }
    }

    // Manifest augmentation puts the root first, keeps order, drops
    // duplicates, and is idempotent.
    #[test]
    fn prop_manifest_augmentation(
        manifest in prop::collection::vec(key_strategy(), 0..20)
    ) {
        let once = augment_precache_manifest(&manifest);

        prop_assert_eq!(once.first().map(String::as_str), Some("/"));

        let unique: HashSet<&String> = once.iter().collect();
        prop_assert_eq!(unique.len(), once.len(), "augmented manifest has duplicates");

        for identifier in &manifest {
            prop_assert!(once.contains(identifier));
        }

        let twice = augment_precache_manifest(&once);
        prop_assert_eq!(once, twice);
    }
}

// == Additional Unit Tests for Spec Scenarios ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::Response;

    // Capacity 2, no age expiry: puts of x, y, z leave exactly {y, z}.
    #[test]
    fn test_capacity_two_keeps_last_two_inserts() {
        let mut store = EntryStore::new(2, Duration::ZERO);

        for key in ["x", "y", "z"] {
            let resp = Response::new(200, key.as_bytes().to_vec());
            store.put(key.to_string(), CacheEntry::new(&resp));
        }

        assert_eq!(store.len(), 2);
        assert!(!store.contains_key("x"));
        assert!(store.contains_key("y"));
        assert!(store.contains_key("z"));
    }

    #[test]
    fn test_eviction_tie_break_is_deterministic() {
        let policy = EvictionPolicy::new(1, Duration::ZERO);

        for _ in 0..5 {
            let mut map: HashMap<String, CacheEntry> = HashMap::new();
            map.insert("b".to_string(), entry_with_access(7));
            map.insert("a".to_string(), entry_with_access(7));

            let evicted = policy.after_insert(&mut map);
            assert_eq!(evicted, vec!["a".to_string()]);
        }
    }
}
