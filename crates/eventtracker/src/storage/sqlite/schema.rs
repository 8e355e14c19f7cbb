//! SQLite schema definitions and SQL query constants.
//!
//! Every statement the SQLite repository runs lives here as a constant, next to
//! the pure decision of what to do with an existing file's schema version.

/// Schema version recorded in `PRAGMA user_version`.
///
/// Opening a file with an older version drops and recreates every table.
pub const SCHEMA_VERSION: i64 = 4;

/// SQL statement to create all tables.
pub const CREATE_TABLES: &str = r#"
-- Users table
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT,
    password TEXT
);

-- Events table
CREATE TABLE IF NOT EXISTS events (
    event_id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT,
    description TEXT,
    date TEXT,
    time TEXT,
    notifications_enabled INTEGER DEFAULT 0
);

-- Indexes for efficient queries
CREATE INDEX IF NOT EXISTS idx_events_date ON events(date);
CREATE INDEX IF NOT EXISTS idx_users_username ON users(username);
"#;

/// SQL statement to drop all tables before recreating them.
pub const DROP_TABLES: &str = r#"
DROP TABLE IF EXISTS users;
DROP TABLE IF EXISTS events;
"#;

// User queries
pub const INSERT_USER: &str = r#"
INSERT INTO users (username, password)
VALUES (?1, ?2)
"#;

pub const SELECT_USER_BY_USERNAME: &str = r#"
SELECT id, username, password
FROM users
WHERE username = ?1
ORDER BY id ASC
LIMIT 1
"#;

pub const SELECT_USER_BY_CREDENTIALS: &str = r#"
SELECT id, username, password
FROM users
WHERE username = ?1 AND password = ?2
ORDER BY id ASC
LIMIT 1
"#;

// Event queries
pub const INSERT_EVENT: &str = r#"
INSERT INTO events (title, description, date, time, notifications_enabled)
VALUES (?1, ?2, ?3, ?4, ?5)
"#;

pub const SELECT_EVENT_BY_ID: &str = r#"
SELECT event_id, title, description, date, time, notifications_enabled
FROM events
WHERE event_id = ?1
"#;

pub const SELECT_ALL_EVENTS: &str = r#"
SELECT event_id, title, description, date, time, notifications_enabled
FROM events
ORDER BY date ASC, event_id ASC
"#;

pub const UPDATE_EVENT: &str = r#"
UPDATE events
SET title = ?2, description = ?3, date = ?4, time = ?5, notifications_enabled = ?6
WHERE event_id = ?1
"#;

pub const DELETE_EVENT: &str = r#"
DELETE FROM events
WHERE event_id = ?1
"#;

/// What opening a database file has to do to its schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaPlan {
    /// Fresh file: create every table.
    Create,
    /// Older schema: drop every table and recreate. Existing rows are lost.
    Recreate { from: i64 },
    /// Already at [`SCHEMA_VERSION`].
    Current,
    /// Written by a newer version; refuse to touch it.
    Unsupported { found: i64 },
}

/// Decides the schema action from the `user_version` found in the file.
pub fn plan_schema(found: i64) -> SchemaPlan {
    match found {
        0 => SchemaPlan::Create,
        v if v == SCHEMA_VERSION => SchemaPlan::Current,
        v if v < SCHEMA_VERSION => SchemaPlan::Recreate { from: v },
        v => SchemaPlan::Unsupported { found: v },
    }
}

/// Script that creates every table and stamps the schema version.
pub fn create_script() -> String {
    format!("BEGIN;\n{CREATE_TABLES}\nPRAGMA user_version = {SCHEMA_VERSION};\nCOMMIT;")
}

/// Script that drops every table, recreates them and stamps the schema version.
pub fn recreate_script() -> String {
    format!(
        "BEGIN;\n{DROP_TABLES}\n{CREATE_TABLES}\nPRAGMA user_version = {SCHEMA_VERSION};\nCOMMIT;"
    )
}
