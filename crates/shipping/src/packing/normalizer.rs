//! Carrier package normalization: unit conversion, floors, and protocol
//! constants.

use rust_decimal::Decimal;
use vivarium_core::{PackageDescriptor, ShippingBox};

/// Centimeters to inches conversion factor used by the carrier API.
pub const CM_TO_INCHES: f64 = 0.393_701;

/// Carrier API minimum billable weight in pounds.
pub const MIN_WEIGHT_LBS: f64 = 0.1;

/// Minimum linear dimension accepted by the carrier, in inches.
pub const MIN_DIMENSION_INCHES: u32 = 1;

// Fixed per-deployment protocol fields. Configuration, not computed state.
const PACKAGE_TYPE: &str = "MyPackage";
const WEIGHT_UNITS: &str = "Lbs";
const DIM_UNITS: &str = "Inches";
const SIGNATURE_OPTIONS: &str = "None";
const DESCRIPTION: &str = "Online order";

/// Convert the selected box and aggregated weight into a carrier-ready
/// package descriptor.
///
/// Dimensions convert cm to inches and round *up*; rounding down would
/// under-report the package and get it rejected at the depot. Every linear
/// dimension is floored at 1 inch and the weight at 0.1 lb, so the result
/// is strictly positive regardless of degenerate upstream values. Both
/// floors are idempotent.
///
/// Insurance is left at zero here - the caller threads the order value in
/// before dispatching to the rate client.
#[must_use]
pub fn normalize_package(selected: &ShippingBox, total_weight: f64) -> PackageDescriptor {
    PackageDescriptor {
        package_type: PACKAGE_TYPE.to_string(),
        user_defined_package_type: selected.name.clone(),
        weight: floor_weight(total_weight),
        weight_units: WEIGHT_UNITS.to_string(),
        length: to_carrier_inches(selected.dimensions.length),
        width: to_carrier_inches(selected.dimensions.width),
        height: to_carrier_inches(selected.dimensions.height),
        dim_units: DIM_UNITS.to_string(),
        insurance: Decimal::ZERO,
        is_additional_handling: false,
        signature_options: SIGNATURE_OPTIONS.to_string(),
        description: DESCRIPTION.to_string(),
        temperature_protection: false,
        is_dangerous_goods: false,
        is_non_stackable: false,
    }
}

/// Floor a weight at the carrier minimum of 0.1 lb.
#[must_use]
pub fn floor_weight(weight: f64) -> f64 {
    weight.max(MIN_WEIGHT_LBS)
}

/// Convert a centimeter measure to carrier inches: ceiling-rounded and
/// floored at 1 inch.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // value is >= 1.0 and far below u32::MAX
pub fn to_carrier_inches(cm: f64) -> u32 {
    (cm * CM_TO_INCHES).ceil().max(1.0) as u32
}
