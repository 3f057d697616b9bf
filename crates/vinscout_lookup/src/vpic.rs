//! Client for the NHTSA vPIC `DecodeVin` endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::debug;
use url::Url;
use vinscout_core::{AttributePair, DEFAULT_API_BASE_URL, ScoutConfig, Vin};

use crate::FetchError;
use crate::payload::parse_attributes;
use crate::source::AttributeSource;

/// Default timeout for HTTP requests.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetches vehicle attributes from a vPIC-compatible service.
#[derive(Debug, Clone)]
pub struct VpicClient {
    client: Client,
    base_url: Url,
}

/// Builder for [`VpicClient`].
#[derive(Debug)]
pub struct VpicClientBuilder {
    base_url: String,
    timeout: Duration,
}

impl VpicClient {
    /// Create a new builder for VpicClient.
    pub fn builder() -> VpicClientBuilder {
        VpicClientBuilder {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Creates a client from configuration.
    pub fn from_config(config: &ScoutConfig) -> Result<Self, FetchError> {
        Self::builder()
            .base_url(&config.api_base_url)
            .timeout(config.timeout())
            .build()
    }

    /// Returns the request URL for `vin`.
    pub fn decode_url(&self, vin: &Vin) -> Result<Url, FetchError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| FetchError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(["api", "vehicles", "DecodeVin", vin.as_str()]);
        url.query_pairs_mut().append_pair("format", "json");
        Ok(url)
    }
}

#[async_trait]
impl AttributeSource for VpicClient {
    async fn fetch_attributes(&self, vin: &Vin) -> Result<Vec<AttributePair>, FetchError> {
        let url = self.decode_url(vin)?;
        debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound(vin.to_string()));
        }
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.bytes().await?;
        let pairs = parse_attributes(&body)?;
        debug!("Received {} attributes for {}", pairs.len(), vin);
        Ok(pairs)
    }
}

impl VpicClientBuilder {
    /// Set the service base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set timeout for HTTP requests.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the VpicClient.
    pub fn build(self) -> Result<VpicClient, FetchError> {
        let base_url = Url::parse(&self.base_url)
            .map_err(|e| FetchError::InvalidUrl(format!("{}: {e}", self.base_url)))?;
        if base_url.cannot_be_a_base() {
            return Err(FetchError::InvalidUrl(self.base_url));
        }

        let client = Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!("vinscout/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(VpicClient { client, base_url })
    }
}
