//! railnet CLI entry point.

#![forbid(unsafe_code)]

use clap::Parser;
use railnet_cli::{Cli, commands};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG wins over --verbose
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match commands::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}

fn report(err: &anyhow::Error) {
    let user_error = err
        .chain()
        .find_map(|cause| cause.downcast_ref::<railnet_core::Error>())
        .filter(|e| e.is_user_error());

    match user_error {
        Some(cause) => {
            eprintln!("Error: {err:#}");
            eprintln!("Hint: {}", hint(cause));
        }
        None => eprintln!("Error: {err:?}"),
    }
}

fn hint(err: &railnet_core::Error) -> &'static str {
    match err {
        railnet_core::Error::MissingFile { .. } => {
            "check `data.dir` and the file names in the config (`railnet config path`)"
        }
        railnet_core::Error::NotFound { .. } => "station IDs are the `station_id` column",
        _ => "run `railnet config path` to see which config file is used",
    }
}
