//! event-tracker CLI entry point.

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use eventtracker::cli::Cli;
use eventtracker::commands::{execute, RunOptions};
use eventtracker::storage::SqliteRepository;
use eventtracker::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize tracing subscriber; stdout is reserved for command output.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "eventtracker=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env().with_overrides(cli.database, cli.missing_row);
    tracing::debug!(
        database = %config.database_path.display(),
        policy = %config.missing_row_policy,
        "Loaded configuration"
    );

    // Opened lazily on the first statement.
    let repo = SqliteRepository::new(config.database_path.clone());

    let options = RunOptions {
        format: cli.format,
        quiet: cli.quiet,
        missing_row_policy: config.missing_row_policy,
    };
    let outcome = execute(cli.command, &repo, options).await;

    if let Some(output) = &outcome.output {
        if outcome.success {
            println!("{}", output);
        } else {
            eprintln!("{}", output);
        }
    }

    if let Err(err) = repo.close().await {
        tracing::error!(error = %err, "Failed to close database");
    }

    Ok(ExitCode::from(outcome.exit_code()))
}
