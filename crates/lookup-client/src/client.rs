//! HTTP client for the phone-lookup relay.

use crate::error::LookupError;
use crate::phone;
use crate::types::{LookupRequest, LookupResult};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Path of the lookup function on the relay host.
pub const LOOKUP_PATH: &str = "/functions/v1/phone-lookup";

/// Phone-lookup relay client.
///
/// Each call to [`RelayClient::lookup`] is exactly one round trip: no
/// retries, no caching, and concurrent identical lookups are not merged.
/// The authorization token is kept in a `SecretString`.
#[derive(Clone)]
pub struct RelayClient {
    client: Client,
    base_url: String,
    token: SecretString,
}

impl RelayClient {
    /// Create a new relay client.
    ///
    /// Fails with [`LookupError::Config`] when the base URL or token is empty.
    pub fn new(
        base_url: impl Into<String>,
        token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, LookupError> {
        let base_url = base_url.into();
        let token = token.into();

        if base_url.trim().is_empty() || token.trim().is_empty() {
            return Err(LookupError::Config);
        }

        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: SecretString::new(token),
        })
    }

    /// Get the configured relay base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Look up a phone number through the relay.
    #[instrument(skip(self))]
    pub async fn lookup(&self, phone_number: &str) -> Result<LookupResult, LookupError> {
        let request = LookupRequest {
            phone_number: phone::clean(phone_number),
        };

        let response = self
            .client
            .post(format!("{}{}", self.base_url, LOOKUP_PATH))
            .header("Authorization", format!("Bearer {}", self.token.expose_secret()))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!(status = %status, "Relay lookup failed");
            return Err(error_from_body(&body).unwrap_or(LookupError::Status(status.as_u16())));
        }

        debug!(
            "Response body: {}",
            body.chars().take(200).collect::<String>()
        );

        let value: serde_json::Value = serde_json::from_str(&body)?;
        if let Some(error) = value.get("error") {
            return Err(LookupError::Relay(error_message(error)));
        }

        serde_json::from_value(value).map_err(LookupError::from)
    }
}

/// Extract the `error` field of a failed response, if the body carries one.
fn error_from_body(body: &str) -> Option<LookupError> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let message = error_message(value.get("error")?);

    if message.is_empty() {
        None
    } else {
        Some(LookupError::Relay(message))
    }
}

fn error_message(error: &serde_json::Value) -> String {
    match error {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}
