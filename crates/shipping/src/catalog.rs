//! Read-only catalog seams to the owning data collaborators.
//!
//! Products, boxes, and addresses live in a document store owned by the
//! excluded CRUD layers; this crate only consumes them through these
//! traits. Implementations are expected to fetch fresh per request - any
//! caching belongs to the calling layer.

use async_trait::async_trait;
use thiserror::Error;
use vivarium_core::{Address, AddressId, ProductId, ProductRecord, ShippingBox};

/// Errors raised by catalog collaborators.
///
/// Unknown IDs are not errors (lookups return empty/`None`); only a
/// store-level failure, such as the backing database being unreachable,
/// surfaces here.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The backing store could not be reached.
    #[error("Catalog unavailable: {0}")]
    Unavailable(String),
}

/// Product catalog lookup capability.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    /// Look up products by ID.
    ///
    /// IDs with no matching product are simply absent from the result.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Unavailable`] when the store itself cannot
    /// be queried.
    async fn find_by_ids(&self, ids: &[ProductId]) -> Result<Vec<ProductRecord>, CatalogError>;
}

/// Shipping box catalog capability.
#[async_trait]
pub trait BoxCatalog: Send + Sync {
    /// List every available shipping box.
    ///
    /// The store usually returns boxes sorted ascending by dimensions, but
    /// the box selector must not rely on that.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Unavailable`] when the store itself cannot
    /// be queried.
    async fn list_boxes(&self) -> Result<Vec<ShippingBox>, CatalogError>;
}

/// Stored address lookup capability.
#[async_trait]
pub trait AddressBook: Send + Sync {
    /// Resolve a stored address; `Ok(None)` when the ID does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Unavailable`] when the store itself cannot
    /// be queried.
    async fn find_address_by_id(&self, id: &AddressId) -> Result<Option<Address>, CatalogError>;
}
