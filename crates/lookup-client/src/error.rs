//! Relay client errors.

use thiserror::Error;

/// Failure of a single lookup round trip.
///
/// The `Display` output is the message shown to the user; no status codes
/// or provider details are exposed beyond what the relay put in its body.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Relay configuration missing")]
    Config,

    /// Error message returned by the relay in an `{ "error": .. }` body.
    #[error("{0}")]
    Relay(String),

    #[error("Request failed with status {0}")]
    Status(u16),

    #[error("Failed to lookup phone number. Please try again.")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response from relay: {0}")]
    Json(#[from] serde_json::Error),
}
