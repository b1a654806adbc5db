//! Normalized carrier rate quotes and ranking tags.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A normalized rate quote from the carrier-rate provider.
///
/// Quotes are ephemeral: created fresh per rate request, handed to the UI,
/// never persisted. `estimated_delivery` is free text from the provider -
/// it may contain a day count, a date range, or just `"Unknown"`; nothing
/// about its format is guaranteed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingQuote {
    /// Composite `carrierCode-selectedService` key, unique within one
    /// ranking batch.
    pub id: String,
    pub carrier: String,
    pub service: String,
    /// Quoted total as a non-negative currency amount.
    ///
    /// Serializes as an exact decimal string; this is the checkout UI
    /// contract, where a float encoding would show rounding artifacts on
    /// displayed prices.
    pub price: Decimal,
    pub estimated_delivery: String,
}

/// Decision-relevant tag computed per ranking batch.
///
/// A quote carries at most one of these; precedence when one quote would
/// qualify for several is Cheapest > Fastest > `BestValue`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuoteTag {
    Cheapest,
    Fastest,
    BestValue,
}
