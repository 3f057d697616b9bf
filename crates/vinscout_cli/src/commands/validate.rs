//! Validate command implementation

use tracing::error;
use vinscout_core::validate;

/// Returns `true` when the VIN is invalid.
pub fn run_validate(candidate: &str) -> bool {
    match validate(candidate) {
        Ok(vin) => {
            println!("{} is valid (check digit {})", vin, vin.check_digit());
            false
        }
        Err(e) => {
            error!("{}: {}", candidate.trim(), e);
            true
        }
    }
}
