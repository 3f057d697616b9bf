//! CLI utility functions

use miette::{IntoDiagnostic, Result};
use tokio::runtime::{Builder, Runtime};

/// Builds the runtime that drives a single `lookup`.
///
/// One request per invocation, so a current-thread runtime is enough; the
/// I/O and time drivers are needed for the HTTP client and its timeout.
pub fn lookup_runtime() -> Result<Runtime> {
    Builder::new_current_thread()
        .enable_all()
        .build()
        .into_diagnostic()
}
