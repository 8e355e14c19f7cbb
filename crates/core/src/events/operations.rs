use crate::error::ValidationError;

use super::date::parse_entry_date;
use super::types::{EventInput, EventRecord};

/// Event fields that passed validation. `date` is still in entry form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedEvent {
    pub title: String,
    pub description: Option<String>,
    pub date: String,
    pub time: Option<String>,
    pub notifications_enabled: bool,
}

impl ValidatedEvent {
    /// Builds the record to persist, using `stored_date` in place of the entry-form date.
    pub fn into_record(self, stored_date: String) -> EventRecord {
        EventRecord {
            title: self.title,
            description: self.description,
            date: stored_date,
            time: self.time,
            notifications_enabled: self.notifications_enabled,
        }
    }
}

/// Validates raw event input before add or update.
///
/// Fields are trimmed. Title and date are required and the date must be a
/// real `MM-DD-YYYY` calendar day. Blank description and time become `None`.
pub fn validate_event_input(input: &EventInput) -> Result<ValidatedEvent, ValidationError> {
    let title = input.title.trim();
    if title.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }

    let date = input.date.trim();
    if date.is_empty() {
        return Err(ValidationError::EmptyDate);
    }
    parse_entry_date(date)?;

    Ok(ValidatedEvent {
        title: title.to_string(),
        description: non_blank(&input.description),
        date: date.to_string(),
        time: non_blank(&input.time),
        notifications_enabled: input.notifications_enabled,
    })
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
