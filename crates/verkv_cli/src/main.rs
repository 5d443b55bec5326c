//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `verkv_core` linkage.
//! - Seed a fresh in-memory store and print the version read back.

use log::warn;
use verkv_core::{init_logging, LoggingConfig, MemoryStore, VersionRepository};

fn main() {
    if let Some(config) = LoggingConfig::from_env() {
        if let Err(err) = init_logging(&config) {
            eprintln!("logging disabled: {err}");
        }
    }

    let store = MemoryStore::new();
    let repo = VersionRepository::new(&store);
    let version = repo.version();
    if version.is_none() {
        warn!("event=version_read module=cli status=missing");
    }

    println!("verkv_core version={}", verkv_core::core_version());
    println!(
        "repository version={}",
        version.as_deref().unwrap_or("(absent)")
    );
}
