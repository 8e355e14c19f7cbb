//! Core for the eventtracker project.
//!
//! Domain types, validation and the repository contracts shared by every
//! storage backend. Nothing in this crate performs I/O.

pub mod error;
pub mod events;
pub mod storage;
pub mod users;

pub use error::{user_message, Result, TrackerError, ValidationError};
