//! Configuration for the lookup relay.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::time::Duration;

/// Environment variable read when `PROVIDER__API_KEY` is not set.
pub const LEGACY_API_KEY_VAR: &str = "NUMVERIFY_API_KEY";

/// Relay configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Validation provider configuration
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    /// numverify access key; lookups fail with 500 while unset
    #[serde(default)]
    pub api_key: Option<String>,

    /// Validation endpoint
    #[serde(default = "default_provider_url")]
    pub base_url: String,

    /// Request timeout
    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub timeout: Duration,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Server listen address
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default implementations
impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_provider_url(),
            timeout: default_timeout(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            port: default_port(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// Default value functions
fn default_provider_url() -> String {
    "http://apilayer.net/api/validate".into()
}

fn default_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_listen_addr() -> String {
    "0.0.0.0".into()
}

fn default_port() -> u16 {
    8787
}

fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .separator("__")
                    .try_parsing(false),
            )
            .build()
            .context("Failed to build configuration")?;

        let mut config: Self = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        if config.provider.api_key.is_none() {
            config.provider.api_key = std::env::var(LEGACY_API_KEY_VAR).ok();
        }

        Ok(config)
    }
}
