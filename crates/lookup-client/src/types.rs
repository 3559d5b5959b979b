//! Request and response types for the phone-lookup relay.

use serde::{Deserialize, Serialize};

/// Normalized phone metadata returned by the relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupResult {
    pub valid: bool,
    pub number: String,
    pub local_format: String,
    pub international_format: String,
    pub country_prefix: String,
    pub country_code: String,
    pub country_name: String,
    pub location: String,
    pub carrier: String,
    pub line_type: String,
}

/// Body of a lookup request sent to the relay.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupRequest {
    pub phone_number: String,
}

/// Error body returned by the relay on failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
