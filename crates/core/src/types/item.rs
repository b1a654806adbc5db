//! Per-unit packable items derived from cart lines.

use serde::{Deserialize, Serialize};

use super::Dimensions;

/// A single physical unit entering the box selector.
///
/// Items are ephemeral: constructed fresh from catalog lookups for every
/// packing request and never persisted. Multi-quantity cart lines are
/// exploded into one `Item` per unit before packing, so `quantity` is
/// always 1 by the time the box selector sees them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unit dimensions in centimeters.
    pub dimensions: Dimensions,
    /// Unit weight in pounds (0 when catalog data is missing).
    pub weight: f64,
    /// Unit count; always 1 post-aggregation.
    pub quantity: u32,
}

impl Item {
    /// Create a single-unit item.
    #[must_use]
    pub const fn unit(dimensions: Dimensions, weight: f64) -> Self {
        Self {
            dimensions,
            weight,
            quantity: 1,
        }
    }

    /// Volume of this item in cubic centimeters, scaled by quantity.
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.dimensions.volume() * f64::from(self.quantity)
    }
}
