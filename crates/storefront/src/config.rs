//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `SECURESHIP_API_KEY` - SecureShip rates API key (see `vivarium-shipping`)
//!
//! ## Optional
//! - `VIVARIUM_HOST` - Bind address (default: 127.0.0.1)
//! - `VIVARIUM_PORT` - Listen port (default: 3000)
//! - `VIVARIUM_DATA_DIR` - Catalog document directory (default: crates/storefront/data)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SECURESHIP_*` / `STORE_*` - see `vivarium-shipping::config`

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;
use vivarium_shipping::ShippingConfig;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Shipping(#[from] vivarium_shipping::ConfigError),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Directory holding the catalog JSON documents
    pub data_dir: PathBuf,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Shipping subsystem configuration
    pub shipping: ShippingConfig,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("VIVARIUM_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("VIVARIUM_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("VIVARIUM_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("VIVARIUM_PORT".to_string(), e.to_string()))?;
        let data_dir =
            PathBuf::from(get_env_or_default("VIVARIUM_DATA_DIR", "crates/storefront/data"));
        let sentry_dsn = std::env::var("SENTRY_DSN").ok();

        Ok(Self {
            host,
            port,
            data_dir,
            sentry_dsn,
            shipping: ShippingConfig::from_env()?,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
