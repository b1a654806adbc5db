//! SecureShip carrier-rate client.
//!
//! One synchronous (awaited) call per quote request, bounded by the
//! configured timeout - no automatic retry. Quote requests are user-facing
//! checkout traffic; retry policy belongs to the caller ("please try
//! again"), and an abandoned request needs no compensation since nothing
//! is persisted.

mod types;

pub use types::{Appointment, CarrierAddress, DeliveryTime, RateOption, RateRequest};

use reqwest::StatusCode;
use reqwest::header::{HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use thiserror::Error;
use tracing::instrument;
use vivarium_core::{Address, PackageDescriptor, ShippingQuote};

use crate::config::{SecureShipConfig, ShippingConfig};

/// Errors that can occur when requesting carrier rates.
#[derive(Debug, Error)]
pub enum RateError {
    /// HTTP transport failure (includes timeouts).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider returned a non-2xx response; the raw body is attached
    /// for diagnostics.
    #[error("Provider error: {status} - {body}")]
    Provider { status: u16, body: String },

    /// The provider's 2xx response body did not parse.
    #[error("Provider response parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Client-side configuration problem (bad credential format, no
    /// from-address anywhere). Raised before any network call.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Client for the SecureShip rates API.
#[derive(Debug, Clone)]
pub struct RatesClient {
    client: reqwest::Client,
    base_url: String,
}

impl RatesClient {
    /// Create a new rates client.
    ///
    /// The API key goes into the default `x-api-key` header; the
    /// configured timeout bounds every request so a hanging provider
    /// cannot hang checkout.
    ///
    /// # Errors
    ///
    /// Returns [`RateError::Configuration`] if the API key is not a valid
    /// header value, or [`RateError::Http`] if the HTTP client fails to
    /// build.
    pub fn new(config: &SecureShipConfig) -> Result<Self, RateError> {
        let mut headers = HeaderMap::new();

        let mut api_key = HeaderValue::from_str(config.api_key.expose_secret())
            .map_err(|e| RateError::Configuration(format!("Invalid API key format: {e}")))?;
        api_key.set_sensitive(true);
        headers.insert("x-api-key", api_key);
        headers.insert("Content-Type", HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Request rate quotes for one package between two formatted addresses.
    ///
    /// The package must already carry its insurance value. Each returned
    /// option is mapped into the normalized [`ShippingQuote`] shape.
    ///
    /// # Errors
    ///
    /// - [`RateError::Http`] on transport failure or timeout.
    /// - [`RateError::Provider`] on any non-2xx status, with the raw error
    ///   body attached.
    /// - [`RateError::Parse`] if a 2xx body is not valid rate JSON.
    #[instrument(skip_all, fields(weight = package.weight, box_name = %package.user_defined_package_type))]
    pub async fn get_rates(
        &self,
        from_address: CarrierAddress,
        to_address: CarrierAddress,
        package: PackageDescriptor,
    ) -> Result<Vec<ShippingQuote>, RateError> {
        let request = RateRequest::single_package(from_address, to_address, package);
        let url = format!("{}/carriers/rates", self.base_url);

        let response = self.client.post(&url).json(&request).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            // 401 means the credential is bad, 400 means we built a bad
            // payload; both surface identically to the caller.
            match status {
                StatusCode::UNAUTHORIZED => {
                    tracing::error!(status = status.as_u16(), "SecureShip rejected the API key");
                }
                StatusCode::BAD_REQUEST => {
                    tracing::error!(
                        status = status.as_u16(),
                        body = %body.chars().take(500).collect::<String>(),
                        "SecureShip rejected the rate request payload"
                    );
                }
                _ => {
                    tracing::error!(
                        status = status.as_u16(),
                        body = %body.chars().take(500).collect::<String>(),
                        "SecureShip rate request failed"
                    );
                }
            }
            return Err(RateError::Provider {
                status: status.as_u16(),
                body,
            });
        }

        let options: Vec<RateOption> = serde_json::from_str(&body)?;
        tracing::debug!(quote_count = options.len(), "received rate quotes");

        Ok(options.into_iter().map(ShippingQuote::from).collect())
    }
}

/// Resolve the ship-from address: an explicit one wins, otherwise the
/// deployment-level store address.
///
/// # Errors
///
/// Returns [`RateError::Configuration`] when neither is available - this
/// fails before any network call is attempted.
pub fn resolve_from_address(
    explicit: Option<Address>,
    config: &ShippingConfig,
) -> Result<Address, RateError> {
    explicit
        .or_else(|| config.store_address.clone())
        .ok_or_else(|| {
            RateError::Configuration(
                "no from-address supplied and no store address configured".to_string(),
            )
        })
}
