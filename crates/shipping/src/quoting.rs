//! End-to-end quote flow: pack, normalize, rate, rank.

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::instrument;
use vivarium_core::{Address, PackageSummary};

use crate::catalog::{BoxCatalog, ProductCatalog};
use crate::config::ShippingConfig;
use crate::packing::{CartLine, PackingError, pack_cart};
use crate::ranking::{RankedQuotes, rank_quotes};
use crate::rates::{CarrierAddress, RateError, RatesClient, resolve_from_address};

/// Errors from the end-to-end quote flow.
///
/// Both stages are fatal to the request: a packing failure means no rate
/// call is attempted, and a provider failure yields no partial result.
/// Neither corrupts any state - quotes are never persisted.
#[derive(Debug, Error)]
pub enum QuoteError {
    #[error(transparent)]
    Packing(#[from] PackingError),
    #[error(transparent)]
    Rates(#[from] RateError),
}

/// A quote request from the checkout layer, addresses already resolved.
#[derive(Debug, Clone)]
pub struct QuoteRequest {
    pub lines: Vec<CartLine>,
    /// Explicit ship-from address; falls back to the configured store
    /// address when absent.
    pub from_address: Option<Address>,
    pub to_address: Address,
    /// Order value, threaded into the package as its insurance amount.
    pub order_value: Decimal,
}

/// The ranked result handed back to the checkout UI.
#[derive(Debug, Clone)]
pub struct ShipmentQuotes {
    pub package: PackageSummary,
    pub quotes: RankedQuotes,
}

/// Run the full flow: aggregate and pack the cart, normalize the package,
/// fetch carrier rates, and rank the quotes.
///
/// The from-address ships as a business address, the to-address as
/// residential.
///
/// # Errors
///
/// Propagates [`PackingError`] from the packing stage and [`RateError`]
/// from address fallback resolution or the provider call.
#[instrument(skip_all, fields(line_count = request.lines.len()))]
pub async fn quote_shipment(
    products: &dyn ProductCatalog,
    boxes: &dyn BoxCatalog,
    client: &RatesClient,
    config: &ShippingConfig,
    request: QuoteRequest,
) -> Result<ShipmentQuotes, QuoteError> {
    let packed = pack_cart(products, boxes, &request.lines).await?;

    let from_stored = resolve_from_address(request.from_address, config)?;
    let from_address = CarrierAddress::from_stored(&from_stored, false);
    let to_address = CarrierAddress::from_stored(&request.to_address, true);

    let mut package = packed.package;
    package.insurance = request.order_value;
    let summary = package.summary();

    let raw_quotes = client.get_rates(from_address, to_address, package).await?;
    tracing::info!(
        quote_count = raw_quotes.len(),
        box_name = %packed.selected_box.name,
        "ranked shipping quotes"
    );

    Ok(ShipmentQuotes {
        package: summary,
        quotes: rank_quotes(raw_quotes),
    })
}
