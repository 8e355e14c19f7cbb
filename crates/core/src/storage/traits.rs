use async_trait::async_trait;

use crate::events::{Event, EventId, EventRecord};
use crate::users::{Credentials, User, UserId};

use super::Result;

/// Repository for user credentials.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Gets the user with exactly this username.
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;

    /// Gets the user whose username and password both match exactly.
    async fn get_user_by_credentials(&self, credentials: &Credentials) -> Result<Option<User>>;

    /// Inserts a new user and returns its id.
    ///
    /// Uniqueness of the username is not enforced here.
    async fn create_user(&self, credentials: &Credentials) -> Result<UserId>;
}

/// Repository for event operations.
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Gets an event by its ID.
    async fn get_event(&self, id: EventId) -> Result<Option<Event>>;

    /// Gets every event, ordered by stored date then insertion order.
    async fn list_events(&self) -> Result<Vec<Event>>;

    /// Inserts a new event and returns its id.
    async fn create_event(&self, record: &EventRecord) -> Result<EventId>;

    /// Replaces every field of an event. Returns the number of rows changed.
    async fn update_event(&self, id: EventId, record: &EventRecord) -> Result<usize>;

    /// Deletes an event by its ID. Returns the number of rows removed.
    async fn delete_event(&self, id: EventId) -> Result<usize>;
}
