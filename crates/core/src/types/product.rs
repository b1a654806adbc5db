//! Product catalog records consumed by the packing flow.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Dimensions, ProductId};

/// The slice of a product document the shipping flow cares about.
///
/// Weight and dimensions are optional in the catalog; the aggregator
/// substitutes documented defaults (weight 0 lb, 1 cm per side) so that
/// incomplete catalog data still packs into some box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    #[serde(rename = "_id")]
    pub id: ProductId,
    #[serde(default)]
    pub title: String,
    pub price: Decimal,
    /// Unit weight in pounds, when the catalog has it.
    #[serde(default)]
    pub weight: Option<f64>,
    /// Unit dimensions in centimeters, when the catalog has them.
    #[serde(default)]
    pub dimensions: Option<Dimensions>,
}
