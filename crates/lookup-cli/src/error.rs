//! Application error types.

use thiserror::Error;

/// Main application error type.
///
/// Display strings are printed to the user as-is.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] anyhow::Error),

    #[error(transparent)]
    Input(#[from] lookup_client::PhoneInputError),

    #[error(transparent)]
    Lookup(#[from] lookup_client::LookupError),

    #[error(transparent)]
    Waitlist(#[from] quota_store::WaitlistError),
}

/// Result type alias for application errors.
pub type AppResult<T> = Result<T, AppError>;
