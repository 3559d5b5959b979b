//! Phone lookup relay - forwards lookups to the numverify validation API.
//!
//! The relay keeps the provider access key server-side:
//! - Accepts `{ "phoneNumber": ... }` from browsers and the CLI
//! - Normalizes the number to carry the US country code
//! - Reshapes the provider response, filling in defaults for missing fields

pub mod api;
pub mod config;
pub mod error;
pub mod normalize;
pub mod provider;

pub use config::Config;
pub use error::RelayError;
pub use normalize::{format_local, merge, NormalizedNumber};
pub use provider::{NumverifyClient, ProviderValidation};
