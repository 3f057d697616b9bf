//! Error types for fetching and looking up vehicles.

use thiserror::Error;
use vinscout_core::{DecodeError, ValidationError};

/// Error type for attribute fetch operations.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network request failed.
    #[error("A network error occurred. Please check your connection and try again. ({0})")]
    Network(#[from] reqwest::Error),

    /// The service has no record for the VIN.
    #[error("No vehicle information was found for this VIN: {0}")]
    NotFound(String),

    /// The service answered with a non-success status.
    #[error("The decoding service returned HTTP {0}")]
    Status(reqwest::StatusCode),

    /// The response body could not be parsed into attribute pairs.
    #[error("Failed to process the data received from the server: {0}")]
    MalformedPayload(String),

    /// The request URL could not be built from the configured base URL.
    #[error("Could not construct a valid URL for the API request: {0}")]
    InvalidUrl(String),
}

/// Error type for a full lookup.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The candidate is not a valid VIN.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The attributes could not be fetched.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The attributes lack core fields.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}
