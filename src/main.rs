//! ccienv - Manage CircleCI project environment variables.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ccienv::cli::output;
use ccienv::cli::{execute, Cli};
use ccienv::core::constants;
use ccienv::error::{ConfigError, Error, RemoteError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(constants::LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("ccienv=debug")
        } else {
            EnvFilter::new("ccienv=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli.command, cli.yes) {
        output::error(&e.to_string());
        if let Some(hint) = hint_for(&e) {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}

/// Suggest a next step for errors the user can fix.
fn hint_for(e: &Error) -> Option<&'static str> {
    match e {
        Error::Config(ConfigError::NotInitialized(_) | ConfigError::MissingField { .. }) => {
            Some("run: ccienv config init")
        }
        Error::Remote(e) => remote_hint(e),
        Error::Prompt(_) => Some("no terminal available; pass --yes to confirm"),
        _ => None,
    }
}

fn remote_hint(e: &RemoteError) -> Option<&'static str> {
    match e.status()? {
        401 | 403 => Some("check the API token, or run: ccienv config init"),
        404 => Some("check the project: --repo, --org and --vcs"),
        _ => None,
    }
}
