//! Core logic for the versioned key-value facade.
//! A pluggable string store plus a repository that seeds and reads a version key.

pub mod config;
pub mod logging;
pub mod repo;
pub mod store;

pub use config::LoggingConfig;
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use repo::version_repo::{VersionRepository, SEEDED_VERSION, VERSION_KEY};
pub use store::memory::MemoryStore;
pub use store::KeyValueStore;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
