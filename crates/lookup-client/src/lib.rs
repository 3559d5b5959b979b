//! Client side of the phone lookup service.
//!
//! - [`phone`]: as-you-type formatting and 10-digit validation of US numbers
//! - [`RelayClient`]: one request per lookup to the relay function

mod client;
mod error;
pub mod phone;
mod types;

pub use client::{RelayClient, LOOKUP_PATH};
pub use error::LookupError;
pub use phone::PhoneInputError;
pub use types::*;
