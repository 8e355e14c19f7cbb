//! Entry-form and stored-form date handling.
//!
//! Users type dates as `MM-DD-YYYY`. Rows store `YYYY-MM-DD` so that ordering
//! by the text column is chronological.

use chrono::{Datelike, NaiveDate};

use crate::error::ValidationError;

/// Format users type dates in.
pub const ENTRY_DATE_FORMAT: &str = "%m-%d-%Y";

/// Sortable format dates are stored in.
pub const STORED_DATE_FORMAT: &str = "%Y-%m-%d";

/// Strictly parses an entry-form date.
///
/// The input must be exactly two month digits, two day digits and four year
/// digits separated by `-`, and must name a real calendar day. Year `0000`
/// is not a calendar year.
///
/// ```
/// use eventtracker_core::events::parse_entry_date;
///
/// assert!(parse_entry_date("02-29-2024").is_ok());
/// assert!(parse_entry_date("02-30-2024").is_err());
/// assert!(parse_entry_date("13-01-2024").is_err());
/// assert!(parse_entry_date("1-15-2024").is_err());
/// ```
pub fn parse_entry_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    if !has_entry_shape(raw) {
        return Err(ValidationError::InvalidDate(raw.to_string()));
    }

    NaiveDate::parse_from_str(raw, ENTRY_DATE_FORMAT)
        .ok()
        .filter(|date| date.year() >= 1)
        .ok_or_else(|| ValidationError::InvalidDate(raw.to_string()))
}

/// Rewrites an entry-form date into the stored form.
///
/// Returns `None` when the input does not parse; callers decide what to keep.
pub fn normalize_entry_date(raw: &str) -> Option<String> {
    parse_entry_date(raw).ok().map(|date| format_stored_date(&date))
}

/// Format a date for storage (YYYY-MM-DD).
pub fn format_stored_date(date: &NaiveDate) -> String {
    date.format(STORED_DATE_FORMAT).to_string()
}

/// Parse a stored date back into a calendar date.
pub fn parse_stored_date(stored: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(stored, STORED_DATE_FORMAT).ok()
}

// chrono accepts single-digit fields and signed years, so the shape is checked first.
fn has_entry_shape(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}
