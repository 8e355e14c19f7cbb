use std::env;
use std::path::PathBuf;

use eventtracker_core::storage::MissingRowPolicy;

/// Default database file, relative to the working directory.
pub const DEFAULT_DATABASE_PATH: &str = "event_tracker.db";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path to SQLite database file (default: "event_tracker.db")
    pub database_path: PathBuf,
    /// How update/delete treat an unknown event id (default: not-found)
    pub missing_row_policy: MissingRowPolicy,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `EVENT_TRACKER_DB` - SQLite database path (default: "event_tracker.db")
    /// - `EVENT_TRACKER_MISSING_ROW` - `not-found` or `ignore` (default: `not-found`)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let missing_row_policy = match lookup("EVENT_TRACKER_MISSING_ROW") {
            Some(value) => value.parse().unwrap_or_else(|err| {
                tracing::warn!(error = %err, "Falling back to the default missing-row policy");
                MissingRowPolicy::default()
            }),
            None => MissingRowPolicy::default(),
        };

        Self {
            database_path: lookup("EVENT_TRACKER_DB")
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE_PATH)),
            missing_row_policy,
        }
    }

    /// Applies command-line overrides on top of this configuration.
    pub fn with_overrides(
        mut self,
        database_path: Option<PathBuf>,
        missing_row_policy: Option<MissingRowPolicy>,
    ) -> Self {
        if let Some(path) = database_path {
            self.database_path = path;
        }
        if let Some(policy) = missing_row_policy {
            self.missing_row_policy = policy;
        }
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_values() {
        let config = Config::from_lookup(lookup_from(&[]));

        assert_eq!(config.database_path, PathBuf::from("event_tracker.db"));
        assert_eq!(config.missing_row_policy, MissingRowPolicy::NotFound);
    }

    #[test]
    fn test_values_from_variables() {
        let config = Config::from_lookup(lookup_from(&[
            ("EVENT_TRACKER_DB", "/tmp/events.db"),
            ("EVENT_TRACKER_MISSING_ROW", "ignore"),
        ]));

        assert_eq!(config.database_path, PathBuf::from("/tmp/events.db"));
        assert_eq!(config.missing_row_policy, MissingRowPolicy::Ignore);
    }

    #[test]
    fn test_unknown_policy_falls_back_to_default() {
        let config = Config::from_lookup(lookup_from(&[("EVENT_TRACKER_MISSING_ROW", "shrug")]));

        assert_eq!(config.missing_row_policy, MissingRowPolicy::NotFound);
    }

    #[test]
    fn test_overrides_win() {
        let config = Config::from_lookup(lookup_from(&[("EVENT_TRACKER_DB", "env.db")]))
            .with_overrides(Some(PathBuf::from("flag.db")), Some(MissingRowPolicy::Ignore));

        assert_eq!(config.database_path, PathBuf::from("flag.db"));
        assert_eq!(config.missing_row_policy, MissingRowPolicy::Ignore);
    }

    #[test]
    fn test_absent_overrides_keep_values() {
        let config = Config::from_lookup(lookup_from(&[("EVENT_TRACKER_DB", "env.db")]))
            .with_overrides(None, None);

        assert_eq!(config.database_path, PathBuf::from("env.db"));
    }
}
