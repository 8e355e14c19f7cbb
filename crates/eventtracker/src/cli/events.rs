//! Event CLI commands.

use clap::{Args, Parser, Subcommand};
use eventtracker_core::events::{EventId, EventInput};

/// Event management commands.
#[derive(Debug, Parser)]
pub struct EventsCommand {
    #[command(subcommand)]
    pub action: EventsAction,
}

/// Fields shared by add and update.
#[derive(Debug, Clone, Args)]
pub struct EventFields {
    /// Event title.
    #[arg(long)]
    pub title: String,
    /// Event date (MM-DD-YYYY).
    #[arg(long)]
    pub date: String,
    /// Optional description.
    #[arg(long)]
    pub description: Option<String>,
    /// Optional time, free-form.
    #[arg(long)]
    pub time: Option<String>,
    /// Enable notifications for this event.
    #[arg(long)]
    pub notify: bool,
}

impl From<EventFields> for EventInput {
    fn from(fields: EventFields) -> Self {
        EventInput::new(fields.title, fields.date)
            .with_description(fields.description.unwrap_or_default())
            .with_time(fields.time.unwrap_or_default())
            .with_notifications(fields.notify)
    }
}

/// Available event actions.
#[derive(Debug, Subcommand)]
pub enum EventsAction {
    /// List every event, oldest first.
    List,
    /// Add a new event.
    Add(EventFields),
    /// Replace every field of an event.
    Update {
        /// Event ID.
        id: EventId,
        #[command(flatten)]
        fields: EventFields,
    },
    /// Delete event by ID.
    Delete {
        /// Event ID.
        id: EventId,
    },
}
