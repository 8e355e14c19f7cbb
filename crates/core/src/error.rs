//! Errors surfaced by the credential and event stores.
//!
//! Every error is recoverable. The caller turns it into a short message with
//! [`user_message`] and carries on.

use thiserror::Error;

use crate::storage::RepositoryError;

/// Errors raised when user-entered fields fail validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Event title cannot be empty")]
    EmptyTitle,
    #[error("Event date cannot be empty")]
    EmptyDate,
    #[error("Invalid date {0:?}, expected MM-DD-YYYY")]
    InvalidDate(String),
    #[error("Username and password are both required")]
    MissingCredentials,
}

/// Errors returned by store operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TrackerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{entity_type} already exists: {id}")]
    AlreadyExists {
        entity_type: &'static str,
        id: String,
    },
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),
    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<RepositoryError> for TrackerError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { entity_type, id } => {
                TrackerError::NotFound { entity_type, id }
            }
            RepositoryError::AlreadyExists { entity_type, id } => {
                TrackerError::AlreadyExists { entity_type, id }
            }
            RepositoryError::ConnectionFailed(msg) => TrackerError::StorageUnavailable(msg),
            RepositoryError::QueryFailed(msg) | RepositoryError::InvalidData(msg) => {
                TrackerError::Storage(msg)
            }
        }
    }
}

/// Maps a [`TrackerError`] to the short message shown to the user.
///
/// This is a pure function; the wording follows the messages the event
/// tracker screens have always shown.
///
/// # Examples
///
/// ```
/// use eventtracker_core::error::{user_message, TrackerError, ValidationError};
///
/// let error = TrackerError::Validation(ValidationError::EmptyTitle);
/// assert_eq!(user_message(&error), "Please fill in title and date.");
/// ```
pub fn user_message(error: &TrackerError) -> &'static str {
    match error {
        TrackerError::Validation(ValidationError::EmptyTitle)
        | TrackerError::Validation(ValidationError::EmptyDate) => "Please fill in title and date.",
        TrackerError::Validation(ValidationError::InvalidDate(_)) => {
            "Invalid date format. Use MM-DD-YYYY."
        }
        TrackerError::Validation(ValidationError::MissingCredentials) => {
            "Please enter both username and password"
        }
        TrackerError::AlreadyExists { entity_type: "User", .. } => "Username already exists",
        TrackerError::AlreadyExists { .. } => "Already exists",
        TrackerError::NotFound { entity_type: "Event", .. } => "Event not found",
        TrackerError::NotFound { .. } => "Not found",
        TrackerError::StorageUnavailable(_) => "Error initializing database",
        TrackerError::Storage(_) => "Something went wrong, please try again",
    }
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, TrackerError>;
