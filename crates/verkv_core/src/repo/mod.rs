//! Repository layer over the key-value capability.
//!
//! # Responsibility
//! - Seed well-known keys into a caller-provided store.
//! - Expose typed accessors that read straight through to the store.
//!
//! # Invariants
//! - Repositories never cache store values.
//! - Repositories never hand their store handle back out.

pub mod version_repo;
