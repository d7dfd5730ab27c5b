//! Admission Filter Module
//!
//! Decides which response outcomes are eligible to enter the store.

use std::collections::HashSet;

// == Admission Filter ==
/// Pure predicate over the configured set of acceptable status codes.
///
/// Responses that fail admission are still returned to the caller
/// unchanged; they are simply never written to the store.
#[derive(Debug, Clone)]
pub struct AdmissionFilter {
    /// Status codes allowed into the store
    acceptable: HashSet<u16>,
}

impl AdmissionFilter {
    // == Constructor ==
    /// Creates a filter admitting exactly the given status codes.
    pub fn new(acceptable: HashSet<u16>) -> Self {
        Self { acceptable }
    }

    // == Accepts ==
    /// Returns true if a response with this status code may be cached.
    ///
    /// Total function: every status code maps to a boolean, no error case.
    pub fn accepts(&self, status_code: u16) -> bool {
        self.acceptable.contains(&status_code)
    }
}

impl Default for AdmissionFilter {
    /// Admits opaque successes (0) and definite successes (200).
    fn default() -> Self {
        Self::new(HashSet::from([0, 200]))
    }
}
