//! Cart packing: aggregation, box selection, and package normalization.
//!
//! # Pipeline
//!
//! ```text
//! cart lines -> aggregate -> select_box -> normalize_package
//! ```
//!
//! The aggregator talks to the product catalog; the selector and the
//! normalizer are pure functions. Box selection is a volume/weight
//! heuristic, deliberately not geometric bin packing - see
//! [`selector::fits_by_volume`] for the documented limitation.

mod aggregator;
mod normalizer;
mod selector;

pub use aggregator::{AggregatedCart, CartLine, aggregate};
pub use normalizer::{
    CM_TO_INCHES, MIN_DIMENSION_INCHES, MIN_WEIGHT_LBS, floor_weight, normalize_package,
    to_carrier_inches,
};
pub use selector::{fits_by_volume, select_box};

use thiserror::Error;
use tracing::instrument;
use vivarium_core::{PackageDescriptor, ProductId, ShippingBox};

use crate::catalog::{BoxCatalog, CatalogError, ProductCatalog};

/// Errors that can occur while packing a cart.
///
/// Packing errors are always fatal to the request - there is no partial
/// quote. Variants carry enough context (weights, counts) to diagnose
/// without reproducing against production data.
#[derive(Debug, Error)]
pub enum PackingError {
    /// A catalog collaborator could not be reached.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// The box catalog is empty; surfaced as "no shipping box configured".
    #[error("No shipping box configured ({item_count} items pending)")]
    NoBoxAvailable { item_count: usize },

    /// Every box's capacity is exceeded; surfaced as "cannot ship this
    /// combination".
    #[error("No box supports {total_weight} lb (checked {box_count} boxes)")]
    NoBoxFitsWeight { total_weight: f64, box_count: usize },
}

/// The result of packing one cart.
#[derive(Debug, Clone, PartialEq)]
pub struct PackedCart {
    /// The box chosen from the catalog.
    pub selected_box: ShippingBox,
    /// Carrier-ready descriptor, insurance still zero.
    pub package: PackageDescriptor,
    /// Summed cart weight in pounds, before the carrier floor.
    pub total_weight: f64,
    /// Unit items packed (after quantity explosion and line skips).
    pub item_count: usize,
}

/// Run the full packing pipeline for a set of cart lines.
///
/// Fetches product records and the box catalog fresh, expands lines into
/// unit items, selects a box, and normalizes it into a carrier-ready
/// package.
///
/// # Errors
///
/// Propagates catalog failures and the selector's
/// [`PackingError::NoBoxAvailable`] / [`PackingError::NoBoxFitsWeight`].
#[instrument(skip_all, fields(line_count = lines.len()))]
pub async fn pack_cart(
    products: &dyn ProductCatalog,
    boxes: &dyn BoxCatalog,
    lines: &[CartLine],
) -> Result<PackedCart, PackingError> {
    let product_ids: Vec<ProductId> = lines.iter().map(|line| line.product_id.clone()).collect();

    let records = products.find_by_ids(&product_ids).await?;
    tracing::debug!(
        requested = product_ids.len(),
        resolved = records.len(),
        "resolved cart products"
    );

    let cart = aggregate(&records, lines);

    let catalog = boxes.list_boxes().await?;
    tracing::debug!(
        box_count = catalog.len(),
        item_count = cart.items.len(),
        total_weight = cart.total_weight,
        "selecting shipping box"
    );

    let selected = select_box(&cart.items, &catalog)?;
    let package = normalize_package(selected, cart.total_weight);

    tracing::info!(
        box_name = %selected.name,
        weight = package.weight,
        length = package.length,
        width = package.width,
        height = package.height,
        "packed cart"
    );

    Ok(PackedCart {
        selected_box: selected.clone(),
        package,
        total_weight: cart.total_weight,
        item_count: cart.items.len(),
    })
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use rust_decimal::Decimal;
    use vivarium_core::{BoxId, Dimensions, ProductRecord};

    use super::*;

    struct FixedCatalog {
        products: Vec<ProductRecord>,
        boxes: Vec<ShippingBox>,
    }

    #[async_trait]
    impl ProductCatalog for FixedCatalog {
        async fn find_by_ids(
            &self,
            ids: &[ProductId],
        ) -> Result<Vec<ProductRecord>, CatalogError> {
            Ok(self
                .products
                .iter()
                .filter(|product| ids.contains(&product.id))
                .cloned()
                .collect())
        }
    }

    #[async_trait]
    impl BoxCatalog for FixedCatalog {
        async fn list_boxes(&self) -> Result<Vec<ShippingBox>, CatalogError> {
            Ok(self.boxes.clone())
        }
    }

    fn fixture() -> FixedCatalog {
        FixedCatalog {
            products: vec![ProductRecord {
                id: ProductId::new("heat-mat"),
                title: "Terrarium Heat Mat".to_string(),
                price: Decimal::new(3499, 2),
                weight: Some(1.2),
                dimensions: Some(Dimensions::new(28.0, 18.0, 2.0)),
            }],
            boxes: vec![
                ShippingBox {
                    id: BoxId::new("box-s"),
                    name: "Small".to_string(),
                    dimensions: Dimensions::new(30.0, 20.0, 10.0),
                    max_weight: 5.0,
                    is_default: true,
                },
                ShippingBox {
                    id: BoxId::new("box-l"),
                    name: "Large".to_string(),
                    dimensions: Dimensions::new(60.0, 40.0, 30.0),
                    max_weight: 25.0,
                    is_default: false,
                },
            ],
        }
    }

    #[tokio::test]
    async fn test_pack_cart_end_to_end() {
        let catalog = fixture();
        let lines = vec![CartLine {
            product_id: ProductId::new("heat-mat"),
            quantity: 2,
        }];

        let packed = pack_cart(&catalog, &catalog, &lines).await.unwrap();
        assert_eq!(packed.selected_box.name, "Small");
        assert_eq!(packed.item_count, 2);
        assert!((packed.total_weight - 2.4).abs() < 1e-9);
        assert!((packed.package.weight - 2.4).abs() < 1e-9);
        // 30 cm -> 12 in, 20 cm -> 8 in, 10 cm -> 4 in
        assert_eq!(packed.package.length, 12);
        assert_eq!(packed.package.width, 8);
        assert_eq!(packed.package.height, 4);
    }

    #[tokio::test]
    async fn test_pack_cart_overweight_cart_fails() {
        let catalog = fixture();
        let lines = vec![CartLine {
            product_id: ProductId::new("heat-mat"),
            quantity: 30,
        }];

        let err = pack_cart(&catalog, &catalog, &lines).await.unwrap_err();
        assert!(matches!(err, PackingError::NoBoxFitsWeight { .. }));
    }

    struct UnavailableProducts;

    #[async_trait]
    impl ProductCatalog for UnavailableProducts {
        async fn find_by_ids(
            &self,
            _ids: &[ProductId],
        ) -> Result<Vec<ProductRecord>, CatalogError> {
            Err(CatalogError::Unavailable("product store offline".to_string()))
        }
    }

    #[tokio::test]
    async fn test_pack_cart_catalog_failure_propagates() {
        let catalog = fixture();
        let lines = vec![CartLine {
            product_id: ProductId::new("heat-mat"),
            quantity: 1,
        }];

        let err = pack_cart(&UnavailableProducts, &catalog, &lines)
            .await
            .unwrap_err();
        assert!(matches!(err, PackingError::Catalog(_)));
    }

    #[tokio::test]
    async fn test_pack_cart_empty_box_catalog_fails() {
        let mut catalog = fixture();
        catalog.boxes.clear();
        let lines = vec![CartLine {
            product_id: ProductId::new("heat-mat"),
            quantity: 1,
        }];

        let err = pack_cart(&catalog, &catalog, &lines).await.unwrap_err();
        assert!(matches!(err, PackingError::NoBoxAvailable { .. }));
    }
}
