use clap::Parser;
use std::process::ExitCode;

use anyhow::{Context, Result};

use jsonls::cli::{self, Args, RunConfig};

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    init_logging()?;

    let config = RunConfig::from_args(args);
    tracing::debug!(
        levels = config.levels.len(),
        inputs = %config.input_description(),
        "starting"
    );

    match cli::run(&config) {
        Ok(printed) => {
            tracing::debug!(printed, "done");
            Ok(ExitCode::SUCCESS)
        }
        // the consumer stopped reading; nothing left to report
        Err(e) if e.is_broken_pipe() => Ok(ExitCode::SUCCESS),
        Err(e) => {
            cli::handle_error(&e);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn init_logging() -> Result<()> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init()
        .context("Failed to initialise logging")
}
