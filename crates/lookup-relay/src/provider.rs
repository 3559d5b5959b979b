//! numverify validation API client.

use crate::error::RelayError;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Country hint sent with every validation request.
pub const COUNTRY_HINT: &str = "US";

/// Validation payload returned by the provider.
///
/// Every descriptive field is optional; missing values are filled in by
/// [`crate::normalize::merge`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderValidation {
    #[serde(default)]
    pub valid: bool,
    pub number: Option<String>,
    pub local_format: Option<String>,
    pub international_format: Option<String>,
    pub country_prefix: Option<String>,
    pub country_code: Option<String>,
    pub country_name: Option<String>,
    pub location: Option<String>,
    pub carrier: Option<String>,
    pub line_type: Option<String>,
}

/// Error object the provider embeds in a 200 response.
#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    info: Option<String>,
}

/// numverify client.
///
/// Stays constructible without an access key so the relay can report the
/// misconfiguration per request.
#[derive(Clone)]
pub struct NumverifyClient {
    client: Client,
    base_url: String,
    api_key: Option<SecretString>,
}

impl NumverifyClient {
    /// Create a new provider client.
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, RelayError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RelayError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.filter(|k| !k.is_empty()).map(SecretString::new),
        })
    }

    /// Whether an access key is configured.
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Validate a number that already carries its country code.
    #[instrument(skip(self))]
    pub async fn validate(&self, full_number: &str) -> Result<ProviderValidation, RelayError> {
        let api_key = self.api_key.as_ref().ok_or(RelayError::ApiKeyNotConfigured)?;

        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("access_key", api_key.expose_secret().as_str()),
                ("number", full_number),
                ("country_code", COUNTRY_HINT),
                ("format", "1"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, "Provider request failed");
            return Err(RelayError::ProviderStatus(status.as_u16()));
        }

        let data: serde_json::Value = response.json().await?;

        if let Some(error) = data.get("error") {
            let info = serde_json::from_value::<ProviderErrorBody>(error.clone())
                .ok()
                .and_then(|e| e.info)
                .filter(|info| !info.is_empty())
                .unwrap_or_else(|| "API request failed".to_string());
            warn!(info = %info, "Provider rejected request");
            return Err(RelayError::ProviderRejected(info));
        }

        let validation: ProviderValidation = serde_json::from_value(data)?;
        debug!(valid = validation.valid, "Provider validation received");
        Ok(validation)
    }
}
