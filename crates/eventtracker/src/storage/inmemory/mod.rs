//! In-memory storage backend for testing.
//!
//! This module provides an in-memory implementation of the repository traits
//! that stores all data behind `Arc<RwLock<_>>`. This is useful for testing
//! the stores without touching SQLite.
//!
//! # Example
//!
//! ```rust,ignore
//! use eventtracker::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! // Use repo for testing...
//! ```

mod repository;

pub use repository::InMemoryRepository;
