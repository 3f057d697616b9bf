//! Error types for VIN validation, attribute decoding and configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while validating a candidate VIN.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The normalized candidate is not exactly 17 characters long.
    #[error("A VIN must be exactly 17 characters long (got {length}).")]
    InvalidLength { length: usize },

    /// The candidate contains a reserved letter (I, O, Q) or a character
    /// with no transliteration value.
    #[error("A VIN cannot contain the letters I, O, or Q (found '{character}' at position {}).", position + 1)]
    IllegalCharacter { character: char, position: usize },

    /// The check digit at position 9 does not match the computed one.
    #[error(
        "The VIN is invalid according to its check digit (ISO 3779): expected '{expected}', found '{found}'."
    )]
    InvalidCheckDigit { expected: char, found: char },
}

/// Errors raised while decoding attribute pairs into a vehicle record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// One or more of `Model Year`, `Make`, `Model` is absent or blank.
    #[error(
        "No information was found for the model, make, or the year it was made (missing: {}).",
        missing.join(", ")
    )]
    MissingCoreFields { missing: Vec<&'static str> },
}

/// Errors raised when constructing a [`VehicleRecord`](crate::VehicleRecord)
/// from loose parts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// A required field was empty or whitespace-only.
    #[error("Required field `{0}` must not be empty")]
    EmptyField(&'static str),
}

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration text is not valid JSON/JSONC.
    #[error("Invalid JSON: {0}")]
    Parse(String),

    /// The configuration does not satisfy the schema.
    #[error("Config validation failed: {0}")]
    Validation(String),

    /// The platform has no data directory to hold the history file.
    #[error("Could not determine a data directory for the lookup history")]
    NoDataDir,
}

impl ConfigError {
    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}
