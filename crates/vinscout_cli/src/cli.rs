//! CLI argument definitions

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// VINScout - look up vehicles by VIN
#[derive(Parser)]
#[command(name = "vinscout")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding the lookup history
    #[arg(long, global = true, env = "VINSCOUT_HISTORY_DIR", value_name = "DIR")]
    pub history_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check a VIN's length, characters and check digit
    Validate {
        /// VIN to check
        vin: String,
    },

    /// Decode a VIN and record it in the history
    Lookup {
        /// VIN to look up
        vin: String,

        /// Base URL of the decoding service
        #[arg(long, env = "VINSCOUT_API_URL", value_name = "URL")]
        api_url: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Manage the lookup history
    History {
        #[command(subcommand)]
        command: HistoryCommands,
    },
}

#[derive(Subcommand)]
pub enum HistoryCommands {
    /// List recent lookups, newest first
    List {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Remove a VIN from the history
    Remove {
        /// VIN to remove
        vin: String,
    },

    /// Remove every entry from the history
    Clear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
