//! Cache error types.

use thiserror::Error;

/// Errors raised by a history store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The store rejected or lost the write.
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }
}
