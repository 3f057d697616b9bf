//! vPIC response envelope.
//!
//! `DecodeVin` answers with
//! `{"Count": n, "Message": "...", "SearchCriteria": "...", "Results": [...]}`
//! where each result is `{"Variable": "...", "Value": "..." | null, ...}`.

use serde::Deserialize;
use vinscout_core::AttributePair;

use crate::FetchError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct DecodeVinResponse {
    results: Vec<ResultItem>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ResultItem {
    #[serde(default)]
    variable: Option<String>,
    #[serde(default)]
    value: Option<String>,
    // Note: ValueId and VariableId exist but are not used
}

/// Parses a `DecodeVin` response body into attribute pairs.
///
/// Results without a variable name are skipped. Values are passed through
/// untouched; blank handling is the decoder's job.
pub fn parse_attributes(body: &[u8]) -> Result<Vec<AttributePair>, FetchError> {
    let response: DecodeVinResponse =
        serde_json::from_slice(body).map_err(|e| FetchError::MalformedPayload(e.to_string()))?;

    if let Some(message) = &response.message {
        tracing::debug!("Service message: {}", message);
    }

    Ok(response
        .results
        .into_iter()
        .filter_map(|item| {
            item.variable.map(|name| AttributePair {
                name,
                value: item.value,
            })
        })
        .collect())
}
