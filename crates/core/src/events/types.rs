use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::date::parse_stored_date;

/// Identifier assigned by the store when an event is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(pub i64);

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EventId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

impl From<i64> for EventId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// A persisted event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub description: Option<String>,
    /// Stored date, `YYYY-MM-DD` unless normalization fell back to the entered text.
    pub date: String,
    /// Free-form time of day.
    pub time: Option<String>,
    pub notifications_enabled: bool,
}

impl Event {
    /// Returns the stored date as a calendar date, if it is in sortable form.
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        parse_stored_date(&self.date)
    }
}

/// Event fields exactly as the user typed them.
///
/// `date` is in entry form (`MM-DD-YYYY`). Empty `description` and `time`
/// mean "not set".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventInput {
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub notifications_enabled: bool,
}

impl EventInput {
    /// Creates an input with the two required fields.
    pub fn new(title: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            date: date.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = time.into();
        self
    }

    pub fn with_notifications(mut self, enabled: bool) -> Self {
        self.notifications_enabled = enabled;
        self
    }
}

/// Validated event fields with the date in stored form, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    pub title: String,
    pub description: Option<String>,
    pub date: String,
    pub time: Option<String>,
    pub notifications_enabled: bool,
}

impl EventRecord {
    /// Attaches the identifier the store assigned to this record.
    pub fn into_event(self, id: EventId) -> Event {
        Event {
            id,
            title: self.title,
            description: self.description,
            date: self.date,
            time: self.time,
            notifications_enabled: self.notifications_enabled,
        }
    }
}
