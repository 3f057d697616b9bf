//! Attribute source trait.

use async_trait::async_trait;
use vinscout_core::{AttributePair, Vin};

use crate::FetchError;

/// Something that can fetch raw attribute pairs for a VIN.
///
/// The production implementation is [`VpicClient`](crate::VpicClient); tests
/// substitute canned responses.
#[async_trait]
pub trait AttributeSource: Send + Sync {
    /// Fetches the raw attributes describing `vin`.
    ///
    /// One request, no retries.
    async fn fetch_attributes(&self, vin: &Vin) -> Result<Vec<AttributePair>, FetchError>;
}
