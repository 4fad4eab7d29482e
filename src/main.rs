//! keywhiz - assign clients and secrets to Keywhiz groups.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use keywhiz_cli::cli::output;
use keywhiz_cli::cli::{execute, Cli};
use keywhiz_cli::core::constants;
use keywhiz_cli::error::{ConfigError, Error};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(constants::LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("keywhiz_cli=debug")
        } else {
            EnvFilter::new("keywhiz_cli=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time().with_writer(std::io::stderr))
        .init();

    if let Err(e) = execute(cli.command, cli.global) {
        let suggestion = match &e {
            Error::Config(ConfigError::MissingServer) => Some(format!(
                "set --server or {}, or add `server` to ~/{}/{}",
                constants::SERVER_ENV,
                constants::CONFIG_DIR,
                constants::CONFIG_FILE
            )),
            Error::Remote(r) if r.is_unauthorized() => Some(format!(
                "session rejected: log in again and set {}",
                constants::SESSION_ENV
            )),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(&hint);
        }
        std::process::exit(1);
    }
}
