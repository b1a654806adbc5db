//! Cart expansion into per-unit packable items.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use vivarium_core::{Dimensions, Item, ProductId, ProductRecord};

/// A cart line as submitted by the checkout layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// The flattened cart: per-unit items plus the summed weight.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedCart {
    /// One entry per physical unit, quantity fields all 1.
    pub items: Vec<Item>,
    /// Total cart weight in pounds.
    pub total_weight: f64,
}

/// Expand cart lines into per-unit items using pre-fetched catalog data.
///
/// Multi-quantity lines are exploded into individual unit items so the
/// packing heuristics apply uniformly. Lines whose product is not in
/// `products` are skipped, not errored - the catalog CRUD layer can race
/// deletions against carts, and under-packing one line beats failing the
/// whole quote. Each skip emits a warning, since silently under-packing
/// causes real shipping problems.
///
/// Missing catalog physicals degrade per the documented defaults: weight
/// 0 lb, and any absent or non-positive dimension component becomes 1 cm.
#[must_use]
pub fn aggregate(products: &[ProductRecord], lines: &[CartLine]) -> AggregatedCart {
    let by_id: HashMap<&str, &ProductRecord> = products
        .iter()
        .map(|product| (product.id.as_str(), product))
        .collect();

    let mut items = Vec::new();
    let mut total_weight = 0.0;

    for line in lines {
        let Some(product) = by_id.get(line.product_id.as_str()) else {
            tracing::warn!(
                product_id = %line.product_id,
                quantity = line.quantity,
                "product not found for cart line, skipping"
            );
            continue;
        };

        let weight = product.weight.unwrap_or(0.0);
        let dimensions = effective_dimensions(product.dimensions);

        if product.dimensions.is_none() {
            tracing::warn!(
                product_id = %product.id,
                title = %product.title,
                "no dimensions on product, packing as unit cube"
            );
        }

        for _ in 0..line.quantity {
            items.push(Item::unit(dimensions, weight));
            total_weight += weight;
        }
    }

    AggregatedCart {
        items,
        total_weight,
    }
}

/// Clamp catalog dimensions to the strictly-positive domain the packing
/// heuristics assume. Zero is treated the same as absent.
fn effective_dimensions(dimensions: Option<Dimensions>) -> Dimensions {
    dimensions.map_or_else(Dimensions::default, |dims| Dimensions {
        length: positive_or_one(dims.length),
        width: positive_or_one(dims.width),
        height: positive_or_one(dims.height),
    })
}

fn positive_or_one(value: f64) -> f64 {
    if value > 0.0 { value } else { 1.0 }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn product(id: &str, weight: Option<f64>, dimensions: Option<Dimensions>) -> ProductRecord {
        ProductRecord {
            id: ProductId::new(id),
            title: format!("Product {id}"),
            price: Decimal::new(1999, 2),
            weight,
            dimensions,
        }
    }

    fn line(id: &str, quantity: u32) -> CartLine {
        CartLine {
            product_id: ProductId::new(id),
            quantity,
        }
    }

    #[test]
    fn test_quantity_explodes_into_unit_items() {
        let products = vec![product("p1", Some(1.5), Some(Dimensions::new(10.0, 8.0, 4.0)))];
        let cart = aggregate(&products, &[line("p1", 3)]);

        assert_eq!(cart.items.len(), 3);
        assert!(cart.items.iter().all(|item| item.quantity == 1));
        assert!((cart.total_weight - 4.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unknown_product_is_skipped() {
        let products = vec![product("p1", Some(2.0), Some(Dimensions::new(5.0, 5.0, 5.0)))];
        let cart = aggregate(&products, &[line("p1", 1), line("ghost", 4)]);

        assert_eq!(cart.items.len(), 1);
        assert!((cart.total_weight - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_missing_physicals_use_defaults() {
        let products = vec![product("p1", None, None)];
        let cart = aggregate(&products, &[line("p1", 2)]);

        assert_eq!(cart.items.len(), 2);
        assert!((cart.total_weight - 0.0).abs() < f64::EPSILON);
        let item = cart.items.first().unwrap();
        assert!((item.dimensions.volume() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_dimension_component_becomes_one() {
        let products = vec![product("p1", Some(1.0), Some(Dimensions::new(10.0, 0.0, 4.0)))];
        let cart = aggregate(&products, &[line("p1", 1)]);

        let dims = cart.items.first().unwrap().dimensions;
        assert!((dims.width - 1.0).abs() < f64::EPSILON);
        assert!((dims.length - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_lines_yield_empty_cart() {
        let products = vec![product("p1", Some(1.0), None)];
        let cart = aggregate(&products, &[]);

        assert!(cart.items.is_empty());
        assert!((cart.total_weight - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_cart_line_wire_shape() {
        let parsed: CartLine =
            serde_json::from_value(serde_json::json!({"productId": "p1", "quantity": 2})).unwrap();
        assert_eq!(parsed, line("p1", 2));
    }
}
