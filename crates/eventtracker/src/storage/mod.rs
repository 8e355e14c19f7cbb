//! Storage backend implementations.
//!
//! This module provides concrete implementations of the repository traits
//! defined in `eventtracker_core::storage`.
//!
//! # Feature Flags
//!
//! - `sqlite` (default): SQLite storage backend using `rusqlite` and `tokio-rusqlite`
//! - `inmemory`: `BTreeMap`-backed backend, always compiled for tests

#[cfg(not(any(feature = "sqlite", feature = "inmemory", test)))]
compile_error!(
    "No storage backend selected. Enable 'sqlite' or 'inmemory' feature. \
    Example: cargo build -p eventtracker --features sqlite"
);

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(any(feature = "inmemory", test))]
pub mod inmemory;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteRepository;

#[cfg(any(feature = "inmemory", test))]
pub use inmemory::InMemoryRepository;
