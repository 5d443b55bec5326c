//! Version repository.
//!
//! # Responsibility
//! - Write the seeded version under `VERSION_KEY` when constructed.
//! - Read the current version back on demand.
//!
//! # Invariants
//! - Right after `new`, the store maps `VERSION_KEY` to `SEEDED_VERSION`.
//! - The seed write is unconditional; it overwrites any pre-existing value.
//! - `version` reflects the store as it is now, including external writes or
//!   removals made after construction.

use crate::store::KeyValueStore;
use log::debug;

/// Store key holding the version string.
pub const VERSION_KEY: &str = "Version";
/// Version value written on repository construction.
pub const SEEDED_VERSION: &str = "1.0.0";

/// Repository that seeds and exposes a single version value.
///
/// `S` may be an owned store, a borrow (`&MemoryStore`), an `Rc` or a trait
/// object handle; see the blanket impls on [`KeyValueStore`].
pub struct VersionRepository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> VersionRepository<S> {
    /// Creates a repository and seeds `VERSION_KEY = SEEDED_VERSION`.
    pub fn new(store: S) -> Self {
        store.set(VERSION_KEY, SEEDED_VERSION);
        debug!(
            "event=version_seeded module=repo status=ok key={} value={}",
            VERSION_KEY, SEEDED_VERSION
        );
        Self { store }
    }

    /// Returns the value currently stored under `VERSION_KEY`.
    pub fn version(&self) -> Option<String> {
        self.store.get(VERSION_KEY)
    }
}
