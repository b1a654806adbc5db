//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures server-side errors to
//! Sentry before responding to the client. All route handlers return
//! `Result<T, AppError>`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use vivarium_core::AddressId;
use vivarium_shipping::{CatalogError, PackingError, QuoteError, RateError};

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// The quote flow failed (packing or provider stage).
    #[error(transparent)]
    Quote(#[from] QuoteError),

    /// A catalog collaborator failed outside the quote flow.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// A referenced address does not resolve; usually an incomplete
    /// profile rather than a server fault.
    #[error("Address not found: {0}")]
    AddressNotFound(AddressId),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    const fn status(&self) -> StatusCode {
        match self {
            Self::Quote(QuoteError::Packing(err)) => match err {
                PackingError::Catalog(_) => StatusCode::INTERNAL_SERVER_ERROR,
                PackingError::NoBoxAvailable { .. } | PackingError::NoBoxFitsWeight { .. } => {
                    StatusCode::UNPROCESSABLE_ENTITY
                }
            },
            Self::Quote(QuoteError::Rates(err)) => match err {
                RateError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
                RateError::Http(_) | RateError::Provider { .. } | RateError::Parse(_) => {
                    StatusCode::BAD_GATEWAY
                }
            },
            Self::Catalog(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::AddressNotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Client-facing message; provider payloads and internals stay out of
    /// responses and go to logs/Sentry instead.
    fn message(&self) -> String {
        match self {
            Self::Quote(QuoteError::Packing(err)) => match err {
                PackingError::Catalog(_) => "Internal server error".to_string(),
                PackingError::NoBoxAvailable { .. } => "No shipping box configured".to_string(),
                PackingError::NoBoxFitsWeight { .. } => {
                    "This order is too heavy to ship in one package".to_string()
                }
            },
            Self::Quote(QuoteError::Rates(RateError::Configuration(_))) | Self::Internal(_) => {
                "Internal server error".to_string()
            }
            Self::Quote(QuoteError::Rates(_)) => {
                "Failed to get shipping quotes, please try again".to_string()
            }
            Self::Catalog(_) => "Internal server error".to_string(),
            Self::AddressNotFound(id) => format!("Address not found: {id}"),
            Self::BadRequest(message) => message.clone(),
        }
    }

    const fn is_server_fault(&self) -> bool {
        matches!(
            self,
            Self::Quote(QuoteError::Packing(PackingError::Catalog(_)))
                | Self::Quote(QuoteError::Rates(_))
                | Self::Catalog(_)
                | Self::Internal(_)
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if self.is_server_fault() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let body = serde_json::json!({ "error": self.message() });
        (self.status(), Json(body)).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
