//! Command-line entry point for synthetic email generation.
//!
//! Settings load through OrthoConfig and the work is delegated to
//! `synthetic_email::cli::run`, so the binary only handles process I/O.

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use synthetic_email::GeneratorSettings;
use synthetic_email::cli::{CliError, RunOutcome, run, shortfall_message, success_message};
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    if let Err(err) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init()
    {
        warn!(error = %err, "tracing init failed");
    }

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            write_line(io::stderr().lock(), &err.to_string());
            ExitCode::FAILURE
        }
    }
}

fn execute() -> Result<(), CliError> {
    let settings =
        GeneratorSettings::load_from_iter(env::args_os()).map_err(|err| CliError::Config {
            message: err.to_string(),
        })?;
    let outcome = run(&settings)?;
    report(&outcome);
    Ok(())
}

fn report(outcome: &RunOutcome) {
    match success_message(outcome) {
        Some(message) => write_line(io::stdout().lock(), &message),
        None => {
            if let Err(err) = io::stdout().lock().write_all(outcome.contents.as_bytes()) {
                drop(err);
            }
        }
    }
    if let Some(warning) = shortfall_message(&outcome.batch) {
        write_line(io::stderr().lock(), &warning);
    }
}

fn write_line(mut out: impl Write, message: &str) {
    if let Err(err) = writeln!(out, "{message}") {
        drop(err);
    }
}
