//! History command implementation

use miette::Result;
use tracing::{info, warn};

use super::{load_config, open_history};
use crate::cli::{Cli, OutputFormat};
use crate::output::output_history;

pub fn run_history_list(cli: &Cli, format: OutputFormat) -> Result<()> {
    let config = load_config(cli)?;
    let history = open_history(&config)?;
    output_history(history.entries(), format)
}

pub fn run_history_remove(cli: &Cli, vin: &str) -> Result<()> {
    let config = load_config(cli)?;
    let mut history = open_history(&config)?;

    if history.remove(vin) {
        info!("Removed {} from history", vin.trim().to_uppercase());
    } else {
        warn!("{} is not in the history", vin.trim().to_uppercase());
    }
    Ok(())
}

pub fn run_history_clear(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    let mut history = open_history(&config)?;
    history.clear();

    info!("History cleared");
    Ok(())
}
