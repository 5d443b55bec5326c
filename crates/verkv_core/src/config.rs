//! Logging configuration sourced from the process environment.
//!
//! The store and repository take no configuration; only the file logger does.

use crate::logging::default_log_level;
use std::path::PathBuf;

/// Environment variable naming the absolute log directory.
pub const LOG_DIR_ENV: &str = "VERKV_LOG_DIR";
/// Environment variable overriding the log level.
pub const LOG_LEVEL_ENV: &str = "VERKV_LOG_LEVEL";

/// Settings consumed by [`crate::logging::init_logging`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// One of `trace|debug|info|warn|error`, case-insensitive.
    pub level: String,
    /// Absolute directory for rolling log files.
    pub log_dir: PathBuf,
}

impl LoggingConfig {
    pub fn new(level: impl Into<String>, log_dir: impl Into<PathBuf>) -> Self {
        Self {
            level: level.into(),
            log_dir: log_dir.into(),
        }
    }

    /// Reads `VERKV_LOG_DIR` and `VERKV_LOG_LEVEL`.
    ///
    /// Returns `None` when no log directory is configured, which leaves file
    /// logging disabled.
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a config from an arbitrary variable lookup.
    ///
    /// Blank values count as unset. A missing level falls back to
    /// [`default_log_level`].
    pub fn from_lookup<F>(lookup: F) -> Option<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_dir = non_blank(lookup(LOG_DIR_ENV))?;
        let level = non_blank(lookup(LOG_LEVEL_ENV))
            .unwrap_or_else(|| default_log_level().to_string());
        Some(Self::new(level, log_dir))
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|trimmed| !trimmed.is_empty())
}

#[cfg(test)]
mod tests {
    use super::{LoggingConfig, LOG_DIR_ENV, LOG_LEVEL_ENV};
    use crate::logging::default_log_level;
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn missing_dir_disables_logging() {
        assert_eq!(
            LoggingConfig::from_lookup(lookup_from(&[(LOG_LEVEL_ENV, "info")])),
            None
        );
        assert_eq!(
            LoggingConfig::from_lookup(lookup_from(&[(LOG_DIR_ENV, "   ")])),
            None
        );
    }

    #[test]
    fn level_defaults_per_build_mode() {
        let config = LoggingConfig::from_lookup(lookup_from(&[(LOG_DIR_ENV, "/var/log/verkv")]))
            .expect("dir is set");
        assert_eq!(config.level, default_log_level());
        assert_eq!(config.log_dir, PathBuf::from("/var/log/verkv"));
    }

    #[test]
    fn explicit_level_is_trimmed() {
        let config = LoggingConfig::from_lookup(lookup_from(&[
            (LOG_DIR_ENV, " /tmp/verkv "),
            (LOG_LEVEL_ENV, " WARN "),
        ]))
        .expect("dir is set");
        assert_eq!(config.level, "WARN");
        assert_eq!(config.log_dir, PathBuf::from("/tmp/verkv"));
    }
}
