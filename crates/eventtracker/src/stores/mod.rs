//! The credential and event stores.
//!
//! Both borrow a repository that owns the database connection, so a single
//! `SqliteRepository` can back them at the same time:
//!
//! ```rust,ignore
//! let repo = SqliteRepository::new("event_tracker.db");
//! let credentials = CredentialStore::new(&repo);
//! let events = EventStore::new(&repo);
//! ```

mod credentials;
mod events;

pub use credentials::CredentialStore;
pub use events::EventStore;
