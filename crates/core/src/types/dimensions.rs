//! Physical dimensions of products and shipping boxes.

use serde::{Deserialize, Serialize};

/// Linear dimensions in centimeters.
///
/// Catalog data stores all dimensions metric; conversion to the carrier's
/// imperial units happens at package-normalization time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Length in centimeters.
    pub length: f64,
    /// Width in centimeters.
    pub width: f64,
    /// Height in centimeters.
    pub height: f64,
}

impl Dimensions {
    /// Create dimensions from length, width, and height in centimeters.
    #[must_use]
    pub const fn new(length: f64, width: f64, height: f64) -> Self {
        Self {
            length,
            width,
            height,
        }
    }

    /// Volume in cubic centimeters.
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.length * self.width * self.height
    }
}

impl Default for Dimensions {
    /// The degenerate-input default: 1 cm per side.
    ///
    /// Products without catalog dimension data still have to pack into
    /// *some* box, so missing dimensions collapse to a unit cube rather
    /// than erroring out.
    fn default() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume() {
        let dims = Dimensions::new(10.0, 20.0, 5.0);
        assert!((dims.volume() - 1000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_default_is_unit_cube() {
        let dims = Dimensions::default();
        assert!((dims.volume() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_serde_shape() {
        let dims = Dimensions::new(30.0, 20.0, 10.0);
        let json = serde_json::to_value(&dims).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"length": 30.0, "width": 20.0, "height": 10.0})
        );
    }
}
