use std::env;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;

use chat_admin::cli::Cli;
use chat_admin::commands;
use chat_admin::config::{self, DB_PATH_ENV};
use chat_admin::confirm::ConsoleConfirmer;
use chat_admin::error::AdminError;

fn main() -> ExitCode {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("chat_admin=warn")),
        )
        .try_init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // clap renders usage/help itself; usage errors exit 1, not clap's 2.
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    let db_path = config::resolve_db_path(cli.db, env::var_os(DB_PATH_ENV));

    match commands::run(cli.command, &db_path, &mut ConsoleConfirmer) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report_failure(&err),
    }
}

/// Sole outcome-to-exit-status mapping; matches the taxonomy exhaustively.
fn report_failure(err: &AdminError) -> ExitCode {
    match err {
        AdminError::Cancelled => println!("{err}"),
        AdminError::Store(source) => eprintln!("Database error: {source}"),
        AdminError::NotFound(_) | AdminError::AlreadyExists(_) => eprintln!("Error: {err}"),
        AdminError::Io(source) => eprintln!("Error: {source}"),
    }
    ExitCode::FAILURE
}
