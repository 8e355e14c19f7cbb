//! CLI command definitions.

pub mod events;
pub mod users;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use eventtracker_core::storage::MissingRowPolicy;

/// Keep track of your events from the command line.
#[derive(Debug, Parser)]
#[command(name = "event-tracker")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the SQLite database file [env: EVENT_TRACKER_DB].
    #[arg(long, global = true)]
    pub database: Option<PathBuf>,

    /// What update/delete do with an unknown event id: not-found or ignore
    /// [env: EVENT_TRACKER_MISSING_ROW].
    #[arg(long, global = true)]
    pub missing_row: Option<MissingRowPolicy>,

    /// Output format.
    #[arg(long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Account registration and login.
    Users(users::UsersCommand),
    /// Event management.
    Events(events::EventsCommand),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "event-tracker",
            "events",
            "list",
            "--database",
            "mine.db",
            "--missing-row",
            "ignore",
            "--format",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.database, Some(PathBuf::from("mine.db")));
        assert_eq!(cli.missing_row, Some(MissingRowPolicy::Ignore));
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_unknown_policy_is_rejected() {
        let result =
            Cli::try_parse_from(["event-tracker", "--missing-row", "maybe", "events", "list"]);
        assert!(result.is_err());
    }
}
