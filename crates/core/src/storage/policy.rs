use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::RepositoryError;

/// How update and delete treat an id that matches no row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MissingRowPolicy {
    /// Report the missing row as `NotFound`.
    #[default]
    NotFound,
    /// Succeed without changing anything.
    Ignore,
}

impl MissingRowPolicy {
    /// Turns an affected-row count into the outcome this policy prescribes.
    ///
    /// # Examples
    ///
    /// ```
    /// use eventtracker_core::storage::MissingRowPolicy;
    ///
    /// assert!(MissingRowPolicy::NotFound.resolve(0, "Event", "7").is_err());
    /// assert!(MissingRowPolicy::Ignore.resolve(0, "Event", "7").is_ok());
    /// assert!(MissingRowPolicy::NotFound.resolve(1, "Event", "7").is_ok());
    /// ```
    pub fn resolve(
        self,
        affected: usize,
        entity_type: &'static str,
        id: impl fmt::Display,
    ) -> Result<(), RepositoryError> {
        match (affected, self) {
            (0, MissingRowPolicy::NotFound) => Err(RepositoryError::NotFound {
                entity_type,
                id: id.to_string(),
            }),
            _ => Ok(()),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MissingRowPolicy::NotFound => "not-found",
            MissingRowPolicy::Ignore => "ignore",
        }
    }
}

impl fmt::Display for MissingRowPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a missing-row policy name is not recognized.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown missing-row policy {0:?} (expected \"not-found\" or \"ignore\")")]
pub struct ParsePolicyError(pub String);

impl FromStr for MissingRowPolicy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "not-found" | "not_found" | "notfound" => Ok(MissingRowPolicy::NotFound),
            "ignore" => Ok(MissingRowPolicy::Ignore),
            _ => Err(ParsePolicyError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_not_found() {
        assert_eq!(MissingRowPolicy::default(), MissingRowPolicy::NotFound);
    }

    #[test]
    fn test_not_found_policy_reports_missing_row() {
        let result = MissingRowPolicy::NotFound.resolve(0, "Event", 7);
        assert_eq!(
            result,
            Err(RepositoryError::NotFound {
                entity_type: "Event",
                id: "7".to_string(),
            })
        );
    }

    #[test]
    fn test_ignore_policy_accepts_missing_row() {
        assert_eq!(MissingRowPolicy::Ignore.resolve(0, "Event", 7), Ok(()));
    }

    #[test]
    fn test_affected_rows_always_succeed() {
        assert_eq!(MissingRowPolicy::NotFound.resolve(1, "Event", 7), Ok(()));
        assert_eq!(MissingRowPolicy::Ignore.resolve(1, "Event", 7), Ok(()));
    }

    #[test]
    fn test_parse_policy() {
        assert_eq!("not-found".parse::<MissingRowPolicy>(), Ok(MissingRowPolicy::NotFound));
        assert_eq!("IGNORE".parse::<MissingRowPolicy>(), Ok(MissingRowPolicy::Ignore));
        assert_eq!(
            "silent".parse::<MissingRowPolicy>(),
            Err(ParsePolicyError("silent".to_string()))
        );
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for policy in [MissingRowPolicy::NotFound, MissingRowPolicy::Ignore] {
            assert_eq!(policy.to_string().parse::<MissingRowPolicy>(), Ok(policy));
        }
    }
}
