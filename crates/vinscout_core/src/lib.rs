//! # vinscout_core
//!
//! Core of VINScout.
//!
//! This crate provides:
//! - VIN normalization and ISO 3779 check-digit validation
//! - Decoding of raw attribute pairs into a typed [`VehicleRecord`]
//! - Configuration loading
//!
//! ## Example
//!
//! ```rust
//! use vinscout_core::{AttributePair, decode, validate};
//!
//! let vin = validate("1hgcm82633a004352").unwrap();
//! let pairs = vec![
//!     AttributePair::new("Model Year", "2003"),
//!     AttributePair::new("Make", "HONDA"),
//!     AttributePair::new("Model", "Accord"),
//!     AttributePair::new("Trim", "EX"),
//! ];
//!
//! let record = decode(&vin, &pairs).unwrap();
//! assert_eq!(record.title(), "2003 HONDA Accord");
//! assert_eq!(record.details().trim.as_deref(), Some("EX"));
//! ```

mod config;
pub mod decoder;
mod error;
mod vehicle;
pub mod vin;

pub use config::{CONFIG_FILES, DEFAULT_API_BASE_URL, ScoutConfig};
pub use decoder::decode;
pub use error::{ConfigError, DecodeError, RecordError, ValidationError};
pub use vehicle::{AttributePair, VehicleDetails, VehicleRecord};
pub use vin::{VIN_LENGTH, Vin, check_digit, validate};

#[cfg(test)]
pub mod test_utils;
