//! Carrier-ready package descriptors.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A normalized, carrier-API-ready package.
///
/// Field names serialize exactly as the SecureShip rates endpoint expects
/// them. Linear dimensions are in inches (ceiling-rounded, floored at 1)
/// and weight is in pounds (floored at 0.1); the carrier rejects
/// non-positive values, so the normalizer guarantees everything here is
/// strictly positive regardless of upstream zero/missing data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageDescriptor {
    /// Fixed protocol label for custom packaging.
    pub package_type: String,
    /// The selected box's display name.
    pub user_defined_package_type: String,
    /// Weight in pounds, floored at 0.1.
    pub weight: f64,
    pub weight_units: String,
    /// Length in inches, >= 1.
    pub length: u32,
    /// Width in inches, >= 1.
    pub width: u32,
    /// Height in inches, >= 1.
    pub height: u32,
    pub dim_units: String,
    /// Declared value for insurance; set from the order value by the
    /// caller, not by the normalizer. The provider's schema wants a JSON
    /// number here, not the default decimal-as-string encoding.
    #[serde(with = "rust_decimal::serde::float")]
    pub insurance: Decimal,
    pub is_additional_handling: bool,
    pub signature_options: String,
    pub description: String,
    pub temperature_protection: bool,
    pub is_dangerous_goods: bool,
    pub is_non_stackable: bool,
}

impl PackageDescriptor {
    /// Summary shape returned to the checkout UI.
    #[must_use]
    pub fn summary(&self) -> PackageSummary {
        PackageSummary {
            weight: self.weight,
            dimensions: SummaryDimensions {
                length: self.length,
                width: self.width,
                height: self.height,
                units: self.dim_units.clone(),
            },
        }
    }
}

/// Package summary consumed by the checkout UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageSummary {
    pub weight: f64,
    pub dimensions: SummaryDimensions,
}

/// Dimensions block of a [`PackageSummary`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryDimensions {
    pub length: u32,
    pub width: u32,
    pub height: u32,
    pub units: String,
}
