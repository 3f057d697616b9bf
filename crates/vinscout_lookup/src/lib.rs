//! VINScout lookups.
//!
//! [`VpicClient`] fetches raw attributes from the NHTSA vPIC service and
//! [`Scout`] composes validation, fetching, decoding and the recent-lookup
//! history into a single `lookup` call.

pub mod error;
pub mod payload;
pub mod scout;
pub mod source;
pub mod vpic;

pub use error::{FetchError, LookupError};
pub use scout::Scout;
pub use source::AttributeSource;
pub use vpic::{DEFAULT_TIMEOUT, VpicClient, VpicClientBuilder};
