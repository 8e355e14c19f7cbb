//! SQLite repository implementation.
//!
//! Implements the repository traits from `eventtracker_core::storage` using SQLite.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::OnceCell;
use tokio_rusqlite::Connection;

use eventtracker_core::events::{Event, EventId, EventRecord};
use eventtracker_core::storage::{EventRepository, RepositoryError, Result, UserRepository};
use eventtracker_core::users::{Credentials, User, UserId};

use super::conversions::{flag_to_sql, row_to_event, row_to_user};
use super::error::{map_open_error, map_tokio_rusqlite_error, map_tokio_rusqlite_error_with_id};
use super::schema::{self, SchemaPlan};

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// Where the database lives.
#[derive(Debug, Clone, PartialEq, Eq)]
enum DatabaseLocation {
    File(PathBuf),
    Memory,
}

/// SQLite-based repository implementation.
///
/// Owns the single connection shared by the credential and event stores. The
/// connection is opened on first use and the schema is created or upgraded at
/// that point.
pub struct SqliteRepository {
    location: DatabaseLocation,
    conn: OnceCell<Connection>,
}

impl SqliteRepository {
    /// Creates a repository backed by a database file.
    ///
    /// Nothing is opened until the first operation.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            location: DatabaseLocation::File(path.into()),
            conn: OnceCell::new(),
        }
    }

    /// Creates a repository backed by an in-memory database.
    ///
    /// Useful for testing - data is lost when the repository is dropped.
    pub fn in_memory() -> Self {
        Self {
            location: DatabaseLocation::Memory,
            conn: OnceCell::new(),
        }
    }

    /// Creates a file-backed repository and opens it right away.
    ///
    /// The database file will be created if it doesn't exist.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let repo = Self::new(path.as_ref());
        repo.connection().await?;
        Ok(repo)
    }

    /// Creates an in-memory repository and opens it right away.
    pub async fn open_in_memory() -> Result<Self> {
        let repo = Self::in_memory();
        repo.connection().await?;
        Ok(repo)
    }

    /// Returns true once the connection has been opened.
    pub fn is_open(&self) -> bool {
        self.conn.initialized()
    }

    /// Closes the connection if it was opened.
    pub async fn close(self) -> Result<()> {
        match self.conn.into_inner() {
            Some(conn) => {
                conn.close()
                    .await
                    .map_err(|e| map_tokio_rusqlite_error(e, "Database"))?;
                tracing::debug!("Database connection closed");
                Ok(())
            }
            None => Ok(()),
        }
    }

    /// Returns the shared connection, opening it on first use.
    async fn connection(&self) -> Result<&Connection> {
        self.conn
            .get_or_try_init(|| async {
                let conn = match &self.location {
                    DatabaseLocation::File(path) => {
                        tracing::debug!(path = %path.display(), "Opening database");
                        Connection::open(path).await
                    }
                    DatabaseLocation::Memory => {
                        tracing::debug!("Opening in-memory database");
                        Connection::open_in_memory().await
                    }
                }
                .map_err(map_open_error)?;

                Self::init_schema(&conn).await?;

                Ok::<_, RepositoryError>(conn)
            })
            .await
    }

    /// Creates or upgrades the schema according to the stored version.
    async fn init_schema(conn: &Connection) -> Result<()> {
        let found: i64 = conn
            .call(|conn| {
                conn.pragma_query_value(None, "user_version", |row| row.get(0))
                    .map_err(wrap_err)
            })
            .await
            .map_err(map_open_error)?;

        let script = match schema::plan_schema(found) {
            SchemaPlan::Current => return Ok(()),
            SchemaPlan::Create => {
                tracing::debug!(
                    version = schema::SCHEMA_VERSION,
                    "Creating users and events tables"
                );
                schema::create_script()
            }
            SchemaPlan::Recreate { from } => {
                tracing::warn!(
                    from,
                    to = schema::SCHEMA_VERSION,
                    "Upgrading database schema, existing users and events are dropped"
                );
                schema::recreate_script()
            }
            SchemaPlan::Unsupported { found } => {
                return Err(RepositoryError::ConnectionFailed(format!(
                    "database schema version {found} is newer than supported version {}",
                    schema::SCHEMA_VERSION
                )));
            }
        };

        conn.call(move |conn| {
            conn.execute_batch(&script).map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(map_open_error)
    }
}

// ============================================================================
// UserRepository implementation
// ============================================================================

#[async_trait]
impl UserRepository for SqliteRepository {
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        let username = username.to_string();

        self.connection()
            .await?
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_USER_BY_USERNAME)
                    .map_err(wrap_err)?;
                match stmt.query_row([&username], row_to_user) {
                    Ok(user) => Ok(Some(user)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "User"))
    }

    async fn get_user_by_credentials(&self, credentials: &Credentials) -> Result<Option<User>> {
        let username = credentials.username.clone();
        let password = credentials.password.clone();

        self.connection()
            .await?
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_USER_BY_CREDENTIALS)
                    .map_err(wrap_err)?;
                match stmt.query_row([&username, &password], row_to_user) {
                    Ok(user) => Ok(Some(user)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "User"))
    }

    async fn create_user(&self, credentials: &Credentials) -> Result<UserId> {
        let username = credentials.username.clone();
        let password = credentials.password.clone();
        let user_id = credentials.username.clone();

        self.connection()
            .await?
            .call(move |conn| {
                conn.execute(schema::INSERT_USER, rusqlite::params![username, password])
                    .map_err(wrap_err)?;
                Ok(UserId(conn.last_insert_rowid()))
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "User", user_id))
    }
}

// ============================================================================
// EventRepository implementation
// ============================================================================

#[async_trait]
impl EventRepository for SqliteRepository {
    async fn get_event(&self, id: EventId) -> Result<Option<Event>> {
        self.connection()
            .await?
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_EVENT_BY_ID).map_err(wrap_err)?;
                match stmt.query_row([id.0], row_to_event) {
                    Ok(event) => Ok(Some(event)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Event", id.to_string()))
    }

    async fn list_events(&self) -> Result<Vec<Event>> {
        // The statement and its row cursor live only inside the closure and are
        // finalized on every return path, including a failed row conversion.
        self.connection()
            .await?
            .call(|conn| {
                let mut stmt = conn.prepare(schema::SELECT_ALL_EVENTS).map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_event).map_err(wrap_err)?;

                let mut events = Vec::new();
                for row_result in rows {
                    events.push(row_result.map_err(wrap_err)?);
                }
                Ok(events)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Event"))
    }

    async fn create_event(&self, record: &EventRecord) -> Result<EventId> {
        let title = record.title.clone();
        let description = record.description.clone();
        let date = record.date.clone();
        let time = record.time.clone();
        let notifications_enabled = flag_to_sql(record.notifications_enabled);

        self.connection()
            .await?
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_EVENT,
                    rusqlite::params![title, description, date, time, notifications_enabled],
                )
                .map_err(wrap_err)?;
                Ok(EventId(conn.last_insert_rowid()))
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Event"))
    }

    async fn update_event(&self, id: EventId, record: &EventRecord) -> Result<usize> {
        let title = record.title.clone();
        let description = record.description.clone();
        let date = record.date.clone();
        let time = record.time.clone();
        let notifications_enabled = flag_to_sql(record.notifications_enabled);

        self.connection()
            .await?
            .call(move |conn| {
                conn.execute(
                    schema::UPDATE_EVENT,
                    rusqlite::params![id.0, title, description, date, time, notifications_enabled],
                )
                .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Event", id.to_string()))
    }

    async fn delete_event(&self, id: EventId) -> Result<usize> {
        self.connection()
            .await?
            .call(move |conn| conn.execute(schema::DELETE_EVENT, [id.0]).map_err(wrap_err))
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Event", id.to_string()))
    }
}
