//! Shipping box reference data.

use serde::{Deserialize, Serialize};

use super::{BoxId, Dimensions};

/// A purchasable shipping container size with weight capacity.
///
/// Boxes are reference data owned by administrative tooling; this crate
/// only ever reads them. At most one box in a catalog carries
/// `is_default` - that invariant is enforced by the owning collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingBox {
    #[serde(rename = "_id")]
    pub id: BoxId,
    /// Display identifier, forwarded to the carrier as the user-defined
    /// package type.
    pub name: String,
    /// Interior dimensions in centimeters.
    pub dimensions: Dimensions,
    /// Weight capacity in pounds.
    #[serde(rename = "maxWeight")]
    pub max_weight: f64,
    #[serde(rename = "isDefault", default)]
    pub is_default: bool,
}

impl ShippingBox {
    /// Interior volume in cubic centimeters.
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.dimensions.volume()
    }
}
