//! Shipping quote and box catalog handlers.

use axum::{Json, extract::State};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use vivarium_core::{AddressId, PackageSummary, ShippingBox};
use vivarium_shipping::{
    AddressBook, BoxCatalog, CartLine, QuoteRequest, RankedQuotes, quote_shipment,
};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Request body for `POST /api/shipping/quotes`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotesRequest {
    pub items: Vec<CartLine>,
    /// Optional explicit ship-from address; the configured store address
    /// is used when absent.
    #[serde(default)]
    pub from_address_id: Option<AddressId>,
    pub to_address_id: AddressId,
    /// Order value, used as the package insurance amount.
    #[serde(default)]
    pub order_value: Decimal,
}

/// Response body for `POST /api/shipping/quotes`.
#[derive(Debug, Serialize)]
pub struct QuotesResponse {
    pub success: bool,
    pub package: PackageSummary,
    #[serde(flatten)]
    pub ranked: RankedQuotes,
}

/// Pack the cart, fetch carrier rates, and return tagged quotes.
pub async fn quotes(
    State(state): State<AppState>,
    Json(request): Json<QuotesRequest>,
) -> Result<Json<QuotesResponse>> {
    if request.items.is_empty() {
        return Err(AppError::BadRequest("No items provided".to_string()));
    }

    let catalog = state.catalog();

    let to_address = catalog
        .find_address_by_id(&request.to_address_id)
        .await?
        .ok_or_else(|| AppError::AddressNotFound(request.to_address_id.clone()))?;

    let from_address = match &request.from_address_id {
        Some(id) => Some(
            catalog
                .find_address_by_id(id)
                .await?
                .ok_or_else(|| AppError::AddressNotFound(id.clone()))?,
        ),
        None => None,
    };

    let result = quote_shipment(
        catalog,
        catalog,
        state.rates(),
        &state.config().shipping,
        QuoteRequest {
            lines: request.items,
            from_address,
            to_address,
            order_value: request.order_value,
        },
    )
    .await?;

    Ok(Json(QuotesResponse {
        success: true,
        package: result.package,
        ranked: result.quotes,
    }))
}

/// List the shipping box catalog.
pub async fn boxes(State(state): State<AppState>) -> Result<Json<Vec<ShippingBox>>> {
    let boxes = state.catalog().list_boxes().await?;
    Ok(Json(boxes))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::time::Duration;

    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use httpmock::prelude::*;
    use secrecy::SecretString;
    use tower::ServiceExt;
    use vivarium_core::{Address, BoxId, Dimensions, ProductId, ProductRecord};
    use vivarium_shipping::{RatesClient, SecureShipConfig, ShippingConfig};

    use crate::catalog::FileCatalog;
    use crate::config::StorefrontConfig;
    use crate::routes::router;
    use crate::state::AppState;

    use super::*;

    fn test_state(rates_base_url: String) -> AppState {
        let secureship = SecureShipConfig {
            api_key: SecretString::from("test-key"),
            base_url: rates_base_url,
            timeout: Duration::from_secs(5),
        };
        let config = StorefrontConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 0,
            data_dir: PathBuf::from("unused"),
            sentry_dsn: None,
            shipping: ShippingConfig {
                secureship: secureship.clone(),
                store_address: Some(Address {
                    id: AddressId::new("store"),
                    street_address: "400 Industrial Ave".to_string(),
                    city: "Vancouver".to_string(),
                    postal_code: "V6A 2P3".to_string(),
                    country: "Canada".to_string(),
                    phone: Some("604-555-2000".to_string()),
                }),
            },
        };

        let catalog = FileCatalog::new(
            vec![ProductRecord {
                id: ProductId::new("heat-mat"),
                title: "Terrarium Heat Mat".to_string(),
                price: rust_decimal::Decimal::new(3499, 2),
                weight: Some(1.2),
                dimensions: Some(Dimensions::new(28.0, 18.0, 2.0)),
            }],
            vec![ShippingBox {
                id: BoxId::new("box-s"),
                name: "Small".to_string(),
                dimensions: Dimensions::new(30.0, 20.0, 10.0),
                max_weight: 5.0,
                is_default: true,
            }],
            vec![Address {
                id: AddressId::new("addr-1"),
                street_address: "123 Gecko Way".to_string(),
                city: "Vancouver".to_string(),
                postal_code: "V6B 1A1".to_string(),
                country: "Canada".to_string(),
                phone: None,
            }],
        );

        let rates = RatesClient::new(&secureship).unwrap();
        AppState::from_parts(config, rates, catalog)
    }

    fn quotes_request(body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/shipping/quotes")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn response_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_quotes_end_to_end() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/carriers/rates");
            then.status(200).json_body(serde_json::json!([
                {
                    "carrierCode": "UPS",
                    "selectedService": "Standard",
                    "serviceName": "UPS Standard",
                    "total": 10.00,
                    "deliveryTime": {"friendlyTime": "2 days"}
                },
                {
                    "carrierCode": "FedEx",
                    "selectedService": "Priority",
                    "serviceName": "FedEx Priority",
                    "total": 15.00,
                    "deliveryTime": {"friendlyTime": "1 day"}
                },
                {
                    "carrierCode": "GLS",
                    "selectedService": "Ground",
                    "serviceName": "GLS Ground",
                    "total": 12.00,
                    "deliveryTime": {"friendlyTime": "3 days"}
                }
            ]));
        });

        let app = router(test_state(server.url("")));
        let response = app
            .oneshot(quotes_request(serde_json::json!({
                "items": [{"productId": "heat-mat", "quantity": 2}],
                "toAddressId": "addr-1",
                "orderValue": "69.98"
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response_json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["package"]["dimensions"]["units"], "Inches");
        assert_eq!(body["cheapest"], "UPS-Standard");
        assert_eq!(body["fastest"], "FedEx-Priority");
        assert_eq!(body["bestValue"], "GLS-Ground");
        assert_eq!(body["quotes"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_quotes_unknown_address_is_404() {
        let server = MockServer::start();
        let app = router(test_state(server.url("")));

        let response = app
            .oneshot(quotes_request(serde_json::json!({
                "items": [{"productId": "heat-mat", "quantity": 1}],
                "toAddressId": "ghost"
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = response_json(response).await;
        assert_eq!(body["error"], "Address not found: ghost");
    }

    #[tokio::test]
    async fn test_quotes_empty_items_is_400() {
        let server = MockServer::start();
        let app = router(test_state(server.url("")));

        let response = app
            .oneshot(quotes_request(serde_json::json!({
                "items": [],
                "toAddressId": "addr-1"
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_quotes_provider_failure_is_502() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/carriers/rates");
            then.status(500).body("upstream exploded");
        });

        let app = router(test_state(server.url("")));
        let response = app
            .oneshot(quotes_request(serde_json::json!({
                "items": [{"productId": "heat-mat", "quantity": 1}],
                "toAddressId": "addr-1"
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body = response_json(response).await;
        assert_eq!(body["error"], "Failed to get shipping quotes, please try again");
    }

    #[tokio::test]
    async fn test_boxes_listing() {
        let server = MockServer::start();
        let app = router(test_state(server.url("")));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/shipping/boxes")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response_json(response).await;
        assert_eq!(body.as_array().unwrap().len(), 1);
        assert_eq!(body[0]["name"], "Small");
    }
}
