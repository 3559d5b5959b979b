//! API request and response types.

use serde::{Deserialize, Serialize};

/// Request to look up a phone number.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupRequest {
    /// Number in any punctuation; only digits are used
    pub phone_number: Option<String>,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub provider_configured: bool,
}
