//! In-memory repository implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use eventtracker_core::events::{sort_events_chronologically, Event, EventId, EventRecord};
use eventtracker_core::storage::{EventRepository, Result, UserRepository};
use eventtracker_core::users::{Credentials, User, UserId};

/// Rows plus the next id, mirroring an AUTOINCREMENT table.
#[derive(Debug)]
struct Table<T> {
    rows: BTreeMap<i64, T>,
    next_id: i64,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl<T> Table<T> {
    fn insert(&mut self, row: impl FnOnce(i64) -> T) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        self.rows.insert(id, row(id));
        id
    }
}

/// In-memory storage backend for testing.
///
/// Ids are handed out in increasing order and never reused, like SQLite's
/// AUTOINCREMENT. Data is not persisted and will be lost when the repository
/// is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    users: Arc<RwLock<Table<User>>>,
    events: Arc<RwLock<Table<Event>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryRepository {
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users
            .rows
            .values()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn get_user_by_credentials(&self, credentials: &Credentials) -> Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users
            .rows
            .values()
            .find(|u| u.username == credentials.username && u.password == credentials.password)
            .cloned())
    }

    async fn create_user(&self, credentials: &Credentials) -> Result<UserId> {
        let mut users = self.users.write().await;
        let id = users.insert(|id| User {
            id: UserId(id),
            username: credentials.username.clone(),
            password: credentials.password.clone(),
        });
        Ok(UserId(id))
    }
}

#[async_trait]
impl EventRepository for InMemoryRepository {
    async fn get_event(&self, id: EventId) -> Result<Option<Event>> {
        let events = self.events.read().await;
        Ok(events.rows.get(&id.0).cloned())
    }

    async fn list_events(&self) -> Result<Vec<Event>> {
        let events = self.events.read().await;
        let mut snapshot: Vec<Event> = events.rows.values().cloned().collect();
        sort_events_chronologically(&mut snapshot);
        Ok(snapshot)
    }

    async fn create_event(&self, record: &EventRecord) -> Result<EventId> {
        let mut events = self.events.write().await;
        let id = events.insert(|id| record.clone().into_event(EventId(id)));
        Ok(EventId(id))
    }

    async fn update_event(&self, id: EventId, record: &EventRecord) -> Result<usize> {
        let mut events = self.events.write().await;
        match events.rows.get_mut(&id.0) {
            Some(event) => {
                *event = record.clone().into_event(id);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_event(&self, id: EventId) -> Result<usize> {
        let mut events = self.events.write().await;
        Ok(usize::from(events.rows.remove(&id.0).is_some()))
    }
}
