//! The `orrery` binary.

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use orrery_app::{AppError, load_config, render, resolve_dirs, run};
use orrery_config::{CliArgs, Config};
use orrery_log::init_logging;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let dirs = match resolve_dirs(&args) {
        Ok(dirs) => dirs,
        Err(e) => {
            eprintln!("Failed to initialize platform directories: {e}");
            return ExitCode::FAILURE;
        }
    };
    let config = match load_config(&dirs, &args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    init_logging(Some(&dirs.log_dir), cfg!(debug_assertions), Some(&config));
    tracing::info!(config_dir = %dirs.config_dir.display(), "orrery starting");

    match report(&config, &args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!(error = %e, "orrery failed");
            ExitCode::FAILURE
        }
    }
}

/// Run and print the report. Returns `false` if the scene ended on the
/// fallback screen.
fn report(config: &Config, args: &CliArgs) -> Result<bool, AppError> {
    let snapshot = run(config, args)?;
    let rendered = render(&snapshot, args.format)?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{rendered}")?;
    Ok(snapshot.fallback.is_none())
}
