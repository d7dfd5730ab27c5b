//! Cache Entry Module
//!
//! Defines cached responses and their metadata.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

// == Response ==
/// A resource response, either fresh from the network or replayed from the cache.
///
/// The payload is opaque to the engine; only the status code is inspected
/// (by the admission filter).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Outcome code associated with the payload. 0 marks an opaque
    /// cross-origin success, 200 a definite success.
    pub status_code: u16,
    /// Raw response bytes
    pub payload: Vec<u8>,
}

impl Response {
    /// Creates a response from a status code and payload bytes.
    pub fn new(status_code: u16, payload: impl Into<Vec<u8>>) -> Self {
        Self {
            status_code,
            payload: payload.into(),
        }
    }
}

// == Cache Entry ==
/// A stored response with the metadata driving expiration and LRU eviction.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// Raw response bytes
    pub payload: Vec<u8>,
    /// Outcome code the response was admitted with
    pub status_code: u16,
    /// Insertion timestamp (Unix milliseconds)
    pub stored_at: u64,
    /// Timestamp of the most recent read (Unix milliseconds), drives LRU order
    pub last_accessed_at: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates an entry from a freshly retrieved response.
    pub fn new(response: &Response) -> Self {
        let now = current_timestamp_ms();
        Self {
            payload: response.payload.clone(),
            status_code: response.status_code,
            stored_at: now,
            last_accessed_at: now,
        }
    }

    // == Touch ==
    /// Marks the entry as read, making it the most recently used.
    pub fn touch(&mut self, now: u64) {
        self.last_accessed_at = now;
    }

    // == Is Expired ==
    /// Checks whether the entry's age exceeds `max_age` at time `now`.
    ///
    /// A zero `max_age` disables age expiration entirely. Otherwise the
    /// entry is expired once `now - stored_at` strictly exceeds the limit.
    pub fn is_expired(&self, max_age: Duration, now: u64) -> bool {
        if max_age.is_zero() {
            return false;
        }
        now.saturating_sub(self.stored_at) > max_age.as_millis() as u64
    }

    // == To Response ==
    /// Reconstructs the response the entry was stored from.
    pub fn to_response(&self) -> Response {
        Response {
            status_code: self.status_code,
            payload: self.payload.clone(),
        }
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_creation() {
        let response = Response::new(200, b"body".to_vec());
        let entry = CacheEntry::new(&response);

        assert_eq!(entry.payload, b"body");
        assert_eq!(entry.status_code, 200);
        assert_eq!(entry.stored_at, entry.last_accessed_at);
    }

    #[test]
    fn test_entry_round_trip() {
        let response = Response::new(0, b"opaque".to_vec());
        let entry = CacheEntry::new(&response);

        assert_eq!(entry.to_response(), response);
    }

    #[test]
    fn test_touch_updates_access_time() {
        let response = Response::new(200, b"body".to_vec());
        let mut entry = CacheEntry::new(&response);
        let stored_at = entry.stored_at;

        entry.touch(stored_at + 500);

        assert_eq!(entry.last_accessed_at, stored_at + 500);
        // stored_at is unaffected by reads
        assert_eq!(entry.stored_at, stored_at);
    }

    #[test]
    fn test_expiration_threshold() {
        let entry = CacheEntry::new(&Response::new(200, b"body".to_vec()));
        let max_age = Duration::from_secs(10);

        // Exactly at the limit the entry is still fresh
        assert!(!entry.is_expired(max_age, entry.stored_at + 10_000));
        // One millisecond past the limit it is expired
        assert!(entry.is_expired(max_age, entry.stored_at + 10_001));
    }

    #[test]
    fn test_zero_max_age_never_expires() {
        let entry = CacheEntry::new(&Response::new(200, b"body".to_vec()));

        assert!(!entry.is_expired(Duration::ZERO, entry.stored_at + u64::MAX / 2));
    }

    #[test]
    fn test_expiration_ignores_access_time() {
        let mut entry = CacheEntry::new(&Response::new(200, b"body".to_vec()));
        let max_age = Duration::from_secs(1);
        let later = entry.stored_at + 5_000;

        // Touching keeps the entry recently used but not fresh
        entry.touch(later);

        assert!(entry.is_expired(max_age, later));
    }
}
