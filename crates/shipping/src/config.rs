//! Shipping configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `SECURESHIP_API_KEY` - SecureShip rates API key
//!
//! ## Optional
//! - `SECURESHIP_BASE_URL` - Rates API base URL (default: `https://secureship.ca/ship/api/v1`)
//! - `SECURESHIP_TIMEOUT_SECS` - Outbound request timeout in seconds (default: 15)
//! - `STORE_STREET_ADDRESS` / `STORE_CITY` / `STORE_POSTAL_CODE` /
//!   `STORE_COUNTRY` / `STORE_PHONE` - Ship-from fallback address used when a
//!   quote request carries no explicit from-address. All of street, city, and
//!   postal code must be present for the fallback to exist.

use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;
use vivarium_core::{Address, AddressId};

const DEFAULT_BASE_URL: &str = "https://secureship.ca/ship/api/v1";
const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Shipping subsystem configuration.
#[derive(Debug, Clone)]
pub struct ShippingConfig {
    /// SecureShip rates API configuration.
    pub secureship: SecureShipConfig,
    /// Deployment-level ship-from address, used when the caller supplies
    /// no explicit from-address.
    pub store_address: Option<Address>,
}

/// SecureShip rates API configuration.
///
/// Implements `Debug` manually to redact the API key.
#[derive(Clone)]
pub struct SecureShipConfig {
    /// API key sent in the `x-api-key` header.
    pub api_key: SecretString,
    /// Rates API base URL.
    pub base_url: String,
    /// Outbound request timeout. Quote requests are user-facing, so a
    /// hanging provider must not hang checkout.
    pub timeout: Duration,
}

impl std::fmt::Debug for SecureShipConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecureShipConfig")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ShippingConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the API key is missing or the timeout is
    /// not a valid integer. A missing credential is a startup error, never
    /// a per-request one.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            secureship: SecureShipConfig::from_env()?,
            store_address: store_address_from_env(),
        })
    }
}

impl SecureShipConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let api_key = get_required_env("SECURESHIP_API_KEY").map(SecretString::from)?;
        let base_url = get_env_or_default("SECURESHIP_BASE_URL", DEFAULT_BASE_URL);
        let timeout_secs = match std::env::var("SECURESHIP_TIMEOUT_SECS") {
            Ok(raw) => raw.parse::<u64>().map_err(|e| {
                ConfigError::InvalidEnvVar("SECURESHIP_TIMEOUT_SECS".to_string(), e.to_string())
            })?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            api_key,
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// Build the ship-from fallback address from `STORE_*` variables.
///
/// Returns `None` unless street, city, and postal code are all set.
fn store_address_from_env() -> Option<Address> {
    let street_address = get_optional_env("STORE_STREET_ADDRESS")?;
    let city = get_optional_env("STORE_CITY")?;
    let postal_code = get_optional_env("STORE_POSTAL_CODE")?;

    Some(Address {
        id: AddressId::new("store"),
        street_address,
        city,
        postal_code,
        country: get_env_or_default("STORE_COUNTRY", "Canada"),
        phone: get_optional_env("STORE_PHONE"),
    })
}

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
