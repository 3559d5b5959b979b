//! HTTP request handlers.

use super::types::{HealthResponse, LookupRequest};
use super::AppState;
use crate::error::RelayError;
use crate::normalize::{merge, NormalizedNumber};
use axum::{body::Bytes, extract::State, http::StatusCode, Json};
use lookup_client::LookupResult;
use tracing::{info, warn};

/// Health check endpoint.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        provider_configured: state.provider.is_configured(),
    })
}

/// CORS preflight: empty 200, headers come from the CORS middleware.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// Look up a phone number with the provider and normalize the result.
pub async fn phone_lookup(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<LookupResult>, RelayError> {
    let request: LookupRequest = serde_json::from_slice(&body)?;

    let raw = request
        .phone_number
        .filter(|n| !n.is_empty())
        .ok_or(RelayError::MissingPhoneNumber)?;

    if !state.provider.is_configured() {
        return Err(RelayError::ApiKeyNotConfigured);
    }

    let number = NormalizedNumber::parse(&raw);
    info!(phone_number = %number.full, "Lookup request received");

    let validation = state.provider.validate(&number.full).await?;

    if !validation.valid {
        warn!(phone_number = %number.full, "Provider reported invalid number");
        return Err(RelayError::InvalidPhoneNumber);
    }

    Ok(Json(merge(validation, &number)))
}
