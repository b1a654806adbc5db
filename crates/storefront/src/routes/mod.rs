//! HTTP route handlers for the shipping API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Health check
//!
//! # Shipping
//! POST /api/shipping/quotes    - Pack a cart and fetch tagged rate quotes
//! GET  /api/shipping/boxes     - List the shipping box catalog
//! ```

pub mod shipping;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the shipping API routes router.
pub fn shipping_api_routes() -> Router<AppState> {
    Router::new()
        .route("/quotes", post(shipping::quotes))
        .route("/boxes", get(shipping::boxes))
}

/// Create the full application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api/shipping", shipping_api_routes())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}
