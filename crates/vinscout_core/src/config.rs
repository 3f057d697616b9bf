//! VINScout configuration.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use jsonc_parser::ParseOptions;
use jsonschema::Validator;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;

// Embed the schema
const SCHEMA_JSON: &str = include_str!("../../../schemas/v1/config.json");

/// Config file names, in discovery order.
pub const CONFIG_FILES: [&str; 2] = [".vinscout.jsonc", ".vinscout.json"];

/// Default base URL of the NHTSA vPIC service.
pub const DEFAULT_API_BASE_URL: &str = "https://vpic.nhtsa.dot.gov";

/// Configuration for lookups and history storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoutConfig {
    /// Base URL of the decoding service.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// HTTP request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Directory holding the lookup history. Relative paths are resolved
    /// against the directory containing the config file.
    #[serde(default)]
    pub history_dir: Option<PathBuf>,

    /// Directory containing the configuration file, if loaded from one.
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl ScoutConfig {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            timeout_secs: default_timeout_secs(),
            history_dir: None,
            base_dir: None,
        }
    }

    /// Looks for a config file in `dir`.
    pub fn discover(dir: impl AsRef<Path>) -> Option<PathBuf> {
        let dir = dir.as_ref();
        CONFIG_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    }

    /// Loads configuration from a `.json` or `.jsonc` file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config = Self::from_json(&content)?;
        if let Some(parent) = path.parent() {
            config.base_dir = Some(parent.to_path_buf());
        }

        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parses configuration from JSON (comments allowed) with schema
    /// validation.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let value = jsonc_parser::parse_to_serde_value(json, &ParseOptions::default())
            .map_err(|e| ConfigError::parse(e.to_string()))?
            .unwrap_or(serde_json::Value::Object(serde_json::Map::new()));

        let schema_json: serde_json::Value = serde_json::from_str(SCHEMA_JSON)
            .map_err(|e| ConfigError::validation(format!("embedded schema: {e}")))?;
        let schema = Validator::new(&schema_json)
            .map_err(|e| ConfigError::validation(format!("embedded schema: {e}")))?;

        if let Err(e) = schema.validate(&value) {
            return Err(ConfigError::validation(format!(
                "{} at {}",
                e,
                e.instance_path()
            )));
        }

        serde_json::from_value(value).map_err(|e| ConfigError::validation(e.to_string()))
    }

    /// Returns the HTTP timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Resolves the history directory.
    ///
    /// Falls back to `<platform data dir>/vinscout` when unset.
    pub fn resolved_history_dir(&self) -> Result<PathBuf, ConfigError> {
        match &self.history_dir {
            Some(dir) if dir.is_relative() => Ok(match &self.base_dir {
                Some(base) => base.join(dir),
                None => dir.clone(),
            }),
            Some(dir) => Ok(dir.clone()),
            None => dirs::data_dir()
                .map(|base| base.join("vinscout"))
                .ok_or(ConfigError::NoDataDir),
        }
    }
}

impl Default for ScoutConfig {
    fn default() -> Self {
        Self::new()
    }
}
