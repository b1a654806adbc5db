//! Vivarium Shipping - package optimization and carrier rate shopping.
//!
//! # Architecture
//!
//! - [`packing`] - cart aggregation, smallest-box selection, and carrier
//!   package normalization (pure heuristics over catalog data)
//! - [`rates`] - SecureShip rates client (the only network call in the
//!   subsystem, single attempt with a bounded timeout)
//! - [`ranking`] - pure cheapest/fastest/best-value tagging of a quote
//!   batch
//! - [`catalog`] - read-only traits to the product/box/address stores
//! - [`quoting`] - the end-to-end flow gluing the above together
//!
//! # Example
//!
//! ```rust,ignore
//! use vivarium_shipping::config::ShippingConfig;
//! use vivarium_shipping::quoting::{QuoteRequest, quote_shipment};
//! use vivarium_shipping::rates::RatesClient;
//!
//! let config = ShippingConfig::from_env()?;
//! let client = RatesClient::new(&config.secureship)?;
//!
//! let result = quote_shipment(&products, &boxes, &client, &config, QuoteRequest {
//!     lines,
//!     from_address: None, // store address fallback
//!     to_address,
//!     order_value,
//! }).await?;
//!
//! for quote in &result.quotes.quotes {
//!     println!("{} {:?}", quote.quote.id, quote.tag);
//! }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod packing;
pub mod quoting;
pub mod ranking;
pub mod rates;

pub use catalog::{AddressBook, BoxCatalog, CatalogError, ProductCatalog};
pub use config::{ConfigError, SecureShipConfig, ShippingConfig};
pub use packing::{CartLine, PackedCart, PackingError, pack_cart};
pub use quoting::{QuoteError, QuoteRequest, ShipmentQuotes, quote_shipment};
pub use ranking::{DeliveryEstimate, RankedQuote, RankedQuotes, rank_quotes};
pub use rates::{CarrierAddress, RateError, RatesClient};
