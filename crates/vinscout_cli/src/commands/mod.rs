//! Command implementations

pub mod history;
pub mod lookup;
pub mod validate;

use miette::{IntoDiagnostic, Result};
use tracing::info;
use vinscout_cache::{FileStore, History};
use vinscout_core::ScoutConfig;

use crate::cli::Cli;

/// Loads the configuration named on the command line, or discovers one in
/// the current directory, then applies command-line overrides.
pub fn load_config(cli: &Cli) -> Result<ScoutConfig> {
    let mut config = if let Some(ref path) = cli.config {
        ScoutConfig::from_file(path).into_diagnostic()?
    } else if let Some(path) = ScoutConfig::discover(".") {
        info!("Using config: {}", path.display());
        ScoutConfig::from_file(&path).into_diagnostic()?
    } else {
        ScoutConfig::new()
    };

    if let Some(dir) = &cli.history_dir {
        config.history_dir = Some(dir.clone());
        config.base_dir = None;
    }

    Ok(config)
}

pub fn history_store(config: &ScoutConfig) -> Result<FileStore> {
    let dir = config.resolved_history_dir().into_diagnostic()?;
    Ok(FileStore::new(dir))
}

pub fn open_history(config: &ScoutConfig) -> Result<History<FileStore>> {
    Ok(History::open(history_store(config)?))
}
