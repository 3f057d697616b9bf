//! Lookup command implementation

use miette::{IntoDiagnostic, Result};
use tracing::error;
use vinscout_lookup::{Scout, VpicClient};

use super::{history_store, load_config};
use crate::cli::{Cli, OutputFormat};
use crate::output::output_record;
use crate::utils::lookup_runtime;

/// Returns `true` when the lookup failed.
pub fn run_lookup(
    cli: &Cli,
    candidate: &str,
    api_url: Option<&str>,
    format: OutputFormat,
) -> Result<bool> {
    let mut config = load_config(cli)?;
    if let Some(url) = api_url {
        config.api_base_url = url.to_string();
    }

    let client = VpicClient::from_config(&config).into_diagnostic()?;
    let mut scout = Scout::new(client, history_store(&config)?);

    let runtime = lookup_runtime()?;
    match runtime.block_on(scout.lookup(candidate)) {
        Ok(record) => {
            output_record(&record, format)?;
            Ok(false)
        }
        Err(e) => {
            error!("Failed to fetch vehicle info: {}", e);
            Ok(true)
        }
    }
}
