//! VINScout CLI
//!
//! Validates VINs, decodes them through the NHTSA vPIC service and keeps a
//! short history of recent lookups.

mod cli;
mod commands;
mod output;
mod utils;

use std::process::ExitCode;

use clap::Parser;
use miette::Result;
use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands, HistoryCommands};
use crate::commands::history::{run_history_clear, run_history_list, run_history_remove};
use crate::commands::lookup::run_lookup;
use crate::commands::validate::run_validate;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(failed) => {
            if failed {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(2)
        }
    }
}

/// Runs the command. `Ok(true)` means the VIN itself was rejected or could
/// not be looked up.
fn run(cli: &Cli) -> Result<bool> {
    match &cli.command {
        Commands::Validate { vin } => Ok(run_validate(vin)),
        Commands::Lookup {
            vin,
            api_url,
            format,
        } => run_lookup(cli, vin, api_url.as_deref(), *format),
        Commands::History { command } => match command {
            HistoryCommands::List { format } => run_history_list(cli, *format).map(|_| false),
            HistoryCommands::Remove { vin } => run_history_remove(cli, vin).map(|_| false),
            HistoryCommands::Clear => run_history_clear(cli).map(|_| false),
        },
    }
}
