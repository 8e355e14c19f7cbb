mod date;
mod operations;
mod sorting;
mod types;

pub use date::{
    format_stored_date, normalize_entry_date, parse_entry_date, parse_stored_date,
    ENTRY_DATE_FORMAT, STORED_DATE_FORMAT,
};
pub use operations::{validate_event_input, ValidatedEvent};
pub use sorting::sort_events_chronologically;
pub use types::{Event, EventId, EventInput, EventRecord};
