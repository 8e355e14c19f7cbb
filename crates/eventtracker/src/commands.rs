//! Runs parsed CLI commands against a repository.
//!
//! Every store error is caught here and turned into the short message the
//! user sees, so a failed command never panics or unwinds past `main`.

use eventtracker_core::error::{user_message, TrackerError};
use eventtracker_core::events::{EventId, EventInput};
use eventtracker_core::storage::{EventRepository, MissingRowPolicy, UserRepository};

use crate::cli::events::EventsAction;
use crate::cli::users::UsersAction;
use crate::cli::{Commands, OutputFormat};
use crate::output::{json, pretty};
use crate::stores::{CredentialStore, EventStore};

/// Output settings shared by every command.
#[derive(Debug, Clone, Copy)]
pub struct RunOptions {
    pub format: OutputFormat,
    pub quiet: bool,
    pub missing_row_policy: MissingRowPolicy,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Pretty,
            quiet: false,
            missing_row_policy: MissingRowPolicy::default(),
        }
    }
}

/// What a command produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub success: bool,
    /// Text to print, if any. Success goes to stdout, failure to stderr.
    pub output: Option<String>,
}

impl Outcome {
    fn ok(output: Option<String>) -> Self {
        Self {
            success: true,
            output,
        }
    }

    fn failed(output: String) -> Self {
        Self {
            success: false,
            output: Some(output),
        }
    }

    /// Process exit code for this outcome.
    pub fn exit_code(&self) -> u8 {
        if self.success {
            0
        } else {
            1
        }
    }
}

/// Executes a command against a repository that stores both users and events.
pub async fn execute<R>(command: Commands, repo: &R, options: RunOptions) -> Outcome
where
    R: UserRepository + EventRepository + ?Sized,
{
    match command {
        Commands::Users(users_cmd) => run_users(users_cmd.action, repo, options).await,
        Commands::Events(events_cmd) => run_events(events_cmd.action, repo, options).await,
    }
}

async fn run_users<R: UserRepository + ?Sized>(
    action: UsersAction,
    repo: &R,
    options: RunOptions,
) -> Outcome {
    let store = CredentialStore::new(repo);

    match action {
        UsersAction::Register { username, password } => {
            match store.register(&username, &password).await {
                Ok(id) => success(options, "Account created successfully", Some(id.0), None),
                Err(err) => failure(options, &err),
            }
        }
        UsersAction::Login { username, password } => {
            match store.authenticate(&username, &password).await {
                Ok(true) => success(options, "Login successful", None, None),
                Ok(false) => rejection(options, "Invalid username or password"),
                Err(err) => failure(options, &err),
            }
        }
    }
}

async fn run_events<R: EventRepository + ?Sized>(
    action: EventsAction,
    repo: &R,
    options: RunOptions,
) -> Outcome {
    let store = EventStore::with_policy(repo, options.missing_row_policy);

    match action {
        EventsAction::List => match store.list_all().await {
            Ok(events) => Outcome::ok(Some(match options.format {
                OutputFormat::Json => json::format_json(&events),
                OutputFormat::Pretty => pretty::format_events(&events),
            })),
            Err(err) => failure(options, &err),
        },
        EventsAction::Add(fields) => {
            let input = EventInput::from(fields);
            match store.add(&input).await {
                Ok(id) => {
                    let detail = stored_event(&store, id).await;
                    success(options, "Event Added", Some(id.0), detail)
                }
                Err(err) => failure(options, &err),
            }
        }
        EventsAction::Update { id, fields } => {
            let input = EventInput::from(fields);
            match store.update(id, &input).await {
                Ok(()) => {
                    let detail = stored_event(&store, id).await;
                    success(options, "Event Updated", Some(id.0), detail)
                }
                Err(err) => failure(options, &err),
            }
        }
        EventsAction::Delete { id } => match store.delete(id).await {
            Ok(()) => success(options, "Event Deleted", Some(id.0), None),
            Err(err) => failure(options, &err),
        },
    }
}

/// Re-reads an event for display. A failed read only loses the detail.
async fn stored_event<R: EventRepository + ?Sized>(
    store: &EventStore<'_, R>,
    id: EventId,
) -> Option<String> {
    match store.get(id).await {
        Ok(event) => event.map(|event| pretty::format_event(&event)),
        Err(err) => {
            tracing::warn!(event_id = %id, error = %err, "Could not re-read event");
            None
        }
    }
}

fn success(
    options: RunOptions,
    message: &str,
    id: Option<i64>,
    detail: Option<String>,
) -> Outcome {
    if options.quiet {
        return Outcome::ok(None);
    }
    match options.format {
        OutputFormat::Json => Outcome::ok(Some(json::format_status(true, message, id))),
        OutputFormat::Pretty => Outcome::ok(Some(match detail {
            Some(detail) => format!("{}\n{}", message, detail),
            None => message.to_string(),
        })),
    }
}

fn rejection(options: RunOptions, message: &str) -> Outcome {
    match options.format {
        OutputFormat::Json => Outcome::failed(json::format_status(false, message, None)),
        OutputFormat::Pretty => Outcome::failed(message.to_string()),
    }
}

fn failure(options: RunOptions, err: &TrackerError) -> Outcome {
    match err {
        TrackerError::Validation(_) | TrackerError::AlreadyExists { .. } => {
            tracing::debug!(error = %err, "Command rejected");
        }
        _ => tracing::error!(error = %err, "Command failed"),
    }
    rejection(options, user_message(err))
}
