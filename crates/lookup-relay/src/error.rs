//! Error types for the lookup relay.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Relay error types.
///
/// Every variant renders as a JSON `{ "error": ... }` body with its status;
/// the message is the only detail a caller sees.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Phone number is required")]
    MissingPhoneNumber,

    #[error("API key not configured")]
    ApiKeyNotConfigured,

    /// Provider answered with a non-2xx status.
    #[error("API request failed with status {0}")]
    ProviderStatus(u16),

    /// Provider could not be reached.
    #[error("API request failed")]
    ProviderUnavailable(#[source] reqwest::Error),

    /// Provider answered with an `error` object.
    #[error("{0}")]
    ProviderRejected(String),

    #[error("Invalid phone number")]
    InvalidPhoneNumber,

    #[error("{0}")]
    Internal(String),
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl RelayError {
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::MissingPhoneNumber => StatusCode::BAD_REQUEST,
            RelayError::ApiKeyNotConfigured => StatusCode::INTERNAL_SERVER_ERROR,
            RelayError::ProviderStatus(code) => {
                StatusCode::from_u16(*code).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            RelayError::ProviderUnavailable(_) => StatusCode::BAD_GATEWAY,
            RelayError::ProviderRejected(_) => StatusCode::BAD_REQUEST,
            RelayError::InvalidPhoneNumber => StatusCode::BAD_REQUEST,
            RelayError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            error!(%status, "Error in phone-lookup relay: {:?}", self);
        }

        let mut message = self.to_string();
        if message.is_empty() {
            message = "Failed to lookup phone number".to_string();
        }

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

impl From<serde_json::Error> for RelayError {
    fn from(e: serde_json::Error) -> Self {
        RelayError::Internal(e.to_string())
    }
}

impl From<reqwest::Error> for RelayError {
    fn from(e: reqwest::Error) -> Self {
        RelayError::ProviderUnavailable(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(RelayError::MissingPhoneNumber.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            RelayError::ApiKeyNotConfigured.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(RelayError::ProviderStatus(429).status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(RelayError::ProviderStatus(1000).status(), StatusCode::BAD_GATEWAY);
        assert_eq!(RelayError::InvalidPhoneNumber.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            RelayError::ProviderStatus(503).to_string(),
            "API request failed with status 503"
        );
        assert_eq!(
            RelayError::ProviderRejected("Invalid access key".into()).to_string(),
            "Invalid access key"
        );
    }

    #[tokio::test]
    async fn test_empty_internal_message_falls_back() {
        let response = RelayError::Internal(String::new()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "Failed to lookup phone number");
    }
}
