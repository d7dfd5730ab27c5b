//! Precache Manifest Module
//!
//! Build-time augmentation of the list of resource identifiers an
//! application wants available before any network request is made.

// == Constants ==
/// The application's root resource, always precached.
pub const ROOT_IDENTIFIER: &str = "/";

// == Manifest Augmenter ==
/// Deterministically inserts always-precached identifiers into a manifest.
///
/// Runs once at build or startup, never during request handling.
#[derive(Debug, Clone)]
pub struct ManifestAugmenter {
    /// Identifiers prepended to every manifest
    always_precached: Vec<String>,
}

impl ManifestAugmenter {
    // == Constructor ==
    /// Creates an augmenter that prepends the given identifiers.
    pub fn new(always_precached: Vec<String>) -> Self {
        Self { always_precached }
    }

    // == Augment ==
    /// Produces a new manifest with the always-precached identifiers first.
    ///
    /// Order is preserved and duplicates are dropped on first occurrence,
    /// so augmenting an already-augmented manifest is a no-op.
    pub fn augment(&self, manifest: &[String]) -> Vec<String> {
        let mut augmented = Vec::with_capacity(self.always_precached.len() + manifest.len());

        for identifier in self.always_precached.iter().chain(manifest.iter()) {
            if !augmented.contains(identifier) {
                augmented.push(identifier.clone());
            }
        }

        augmented
    }
}

impl Default for ManifestAugmenter {
    /// Prepends the root identifier only.
    fn default() -> Self {
        Self::new(vec![ROOT_IDENTIFIER.to_string()])
    }
}

// == Free Function ==
/// Augments a precache manifest with the default always-precached set.
///
/// Independent of any running cache handle.
pub fn augment_precache_manifest(manifest: &[String]) -> Vec<String> {
    ManifestAugmenter::default().augment(manifest)
}
