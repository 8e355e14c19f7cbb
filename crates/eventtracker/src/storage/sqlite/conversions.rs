//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.
//! These are testable in isolation without database access.

use eventtracker_core::events::{Event, EventId};
use eventtracker_core::users::{User, UserId};
use rusqlite::Row;

/// Convert a SQLite row to a User.
///
/// Expected columns: id, username, password
pub fn row_to_user(row: &Row) -> rusqlite::Result<User> {
    let id: i64 = row.get(0)?;
    let username: Option<String> = row.get(1)?;
    let password: Option<String> = row.get(2)?;

    Ok(User {
        id: UserId(id),
        username: username.unwrap_or_default(),
        password: password.unwrap_or_default(),
    })
}

/// Convert a SQLite row to an Event.
///
/// Expected columns: event_id, title, description, date, time, notifications_enabled
pub fn row_to_event(row: &Row) -> rusqlite::Result<Event> {
    let id: i64 = row.get(0)?;
    let title: Option<String> = row.get(1)?;
    let description: Option<String> = row.get(2)?;
    let date: Option<String> = row.get(3)?;
    let time: Option<String> = row.get(4)?;
    let notifications_enabled: Option<i64> = row.get(5)?;

    Ok(Event {
        id: EventId(id),
        title: title.unwrap_or_default(),
        description: non_empty(description),
        date: date.unwrap_or_default(),
        time: non_empty(time),
        notifications_enabled: flag_from_sql(notifications_enabled),
    })
}

/// Format the notification flag for SQLite storage.
pub fn flag_to_sql(enabled: bool) -> i64 {
    if enabled {
        1
    } else {
        0
    }
}

/// Parse the notification flag; NULL falls back to the column default.
fn flag_from_sql(value: Option<i64>) -> bool {
    value.unwrap_or(0) == 1
}

// Rows written before optional fields became NULL may hold empty strings.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_to_sql() {
        assert_eq!(flag_to_sql(true), 1);
        assert_eq!(flag_to_sql(false), 0);
    }

    #[test]
    fn test_flag_from_sql() {
        assert!(flag_from_sql(Some(1)));
        assert!(!flag_from_sql(Some(0)));
        assert!(!flag_from_sql(None));
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(Some("Desc".to_string())).as_deref(), Some("Desc"));
        assert_eq!(non_empty(Some(String::new())), None);
        assert_eq!(non_empty(None), None);
    }

    #[test]
    fn test_row_to_event_reads_nullable_columns() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        let event = conn
            .query_row(
                "SELECT 3, 'Lunch', NULL, '2024-02-01', '', NULL",
                [],
                row_to_event,
            )
            .unwrap();

        assert_eq!(event.id, EventId(3));
        assert_eq!(event.title, "Lunch");
        assert_eq!(event.description, None);
        assert_eq!(event.date, "2024-02-01");
        assert_eq!(event.time, None);
        assert!(!event.notifications_enabled);
    }

    #[test]
    fn test_row_to_user() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        let user = conn
            .query_row("SELECT 1, 'alice', 'pw'", [], row_to_user)
            .unwrap();

        assert_eq!(user.id, UserId(1));
        assert_eq!(user.username, "alice");
        assert_eq!(user.password, "pw");
    }
}
