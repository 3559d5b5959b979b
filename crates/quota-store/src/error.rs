//! Storage and waitlist errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Storage error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Waitlist sign-up failures. Validation variants carry the user-facing text.
#[derive(Error, Debug)]
pub enum WaitlistError {
    #[error("Please enter your email")]
    EmptyEmail,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error(transparent)]
    Store(#[from] StoreError),
}
