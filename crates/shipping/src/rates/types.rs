//! SecureShip rates API wire types.
//!
//! Shapes here serialize byte-compatibly with the provider's JSON schema;
//! field names and the fixed protocol stubs (tax IDs, appointment block)
//! match what the endpoint validates.

use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use vivarium_core::{Address, PackageDescriptor, ShippingQuote};

/// All quotes are requested in Canadian dollars.
pub const CURRENCY_CODE: &str = "CAD";
const BILLING_OPTIONS: &str = "Prepaid";

// Appointment stub required by the provider's schema: a near-future date
// with a fixed afternoon slot. No appointment is actually booked.
const APPOINTMENT_TYPE: &str = "None";
const APPOINTMENT_TIME: &str = "3:00 PM";
const APPOINTMENT_LEAD_DAYS: i64 = 14;

// Tax-ID and phone stubs accepted by the provider for rate shopping.
const TAX_ID_BUSINESS: &str = "A-123456-Z";
const TAX_ID_RESIDENTIAL: &str = "B-654321-Y";
const PHONE_FALLBACK_BUSINESS: &str = "604-555-7890";
const PHONE_FALLBACK_RESIDENTIAL: &str = "604-555-1234";

/// Request body for `POST /carriers/rates`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RateRequest {
    pub from_address: CarrierAddress,
    pub to_address: CarrierAddress,
    pub packages: Vec<PackageDescriptor>,
    /// ISO 8601 timestamp.
    pub ship_date_time: String,
    pub currency_code: String,
    pub billing_options: String,
    pub is_documents_only: bool,
}

impl RateRequest {
    /// Build a single-package rate request shipping now.
    #[must_use]
    pub fn single_package(
        from_address: CarrierAddress,
        to_address: CarrierAddress,
        package: PackageDescriptor,
    ) -> Self {
        Self {
            from_address,
            to_address,
            packages: vec![package],
            ship_date_time: Utc::now().to_rfc3339(),
            currency_code: CURRENCY_CODE.to_string(),
            billing_options: BILLING_OPTIONS.to_string(),
            is_documents_only: false,
        }
    }
}

/// The carrier-API-specific address shape.
///
/// Distinct from the stored [`Address`] record: adds the country code,
/// tax-id stub, handling flags, and the appointment stub.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarrierAddress {
    pub addr1: String,
    /// `"CA"` or `"US"`.
    pub country_code: String,
    pub postal_code: String,
    pub city: String,
    pub tax_id: String,
    pub residential: bool,
    pub is_saturday: bool,
    pub is_inside: bool,
    pub is_tail_gate: bool,
    pub is_trade_show: bool,
    pub is_limited_access: bool,
    pub is_stopin_only: bool,
    pub appointment: Appointment,
}

/// Appointment stub block required by the provider's schema.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub appointment_type: String,
    pub phone: String,
    /// `YYYY-MM-DD`, about two weeks out.
    pub date: String,
    pub time: String,
}

impl CarrierAddress {
    /// Format a stored address for the provider.
    ///
    /// Country names map to `"CA"`/`"US"` codes (anything that is not
    /// Canada defaults to US). Missing phone numbers fall back to fixed
    /// stubs the provider accepts for rate shopping.
    #[must_use]
    pub fn from_stored(address: &Address, residential: bool) -> Self {
        let appointment_date = (Utc::now() + Duration::days(APPOINTMENT_LEAD_DAYS))
            .format("%Y-%m-%d")
            .to_string();

        let phone_fallback = if residential {
            PHONE_FALLBACK_RESIDENTIAL
        } else {
            PHONE_FALLBACK_BUSINESS
        };

        Self {
            addr1: address.street_address.clone(),
            country_code: if address.country == "Canada" { "CA" } else { "US" }.to_string(),
            postal_code: address.postal_code.clone(),
            city: address.city.clone(),
            tax_id: if residential {
                TAX_ID_RESIDENTIAL
            } else {
                TAX_ID_BUSINESS
            }
            .to_string(),
            residential,
            is_saturday: false,
            is_inside: false,
            is_tail_gate: false,
            is_trade_show: false,
            is_limited_access: false,
            is_stopin_only: false,
            appointment: Appointment {
                appointment_type: APPOINTMENT_TYPE.to_string(),
                phone: address
                    .phone
                    .clone()
                    .unwrap_or_else(|| phone_fallback.to_string()),
                date: appointment_date,
                time: APPOINTMENT_TIME.to_string(),
            },
        }
    }
}

/// One rate option as returned by the provider.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateOption {
    pub carrier_code: String,
    pub selected_service: String,
    pub service_name: String,
    pub total: Decimal,
    #[serde(default)]
    pub delivery_time: Option<DeliveryTime>,
    /// Provider-side marketing tags; ignored, the ranker computes its own.
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

/// Delivery-time block of a [`RateOption`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryTime {
    #[serde(default)]
    pub friendly_time: Option<String>,
}

impl From<RateOption> for ShippingQuote {
    fn from(option: RateOption) -> Self {
        Self {
            id: format!("{}-{}", option.carrier_code, option.selected_service),
            carrier: option.carrier_code,
            service: option.service_name,
            price: option.total,
            estimated_delivery: option
                .delivery_time
                .and_then(|delivery| delivery.friendly_time)
                .unwrap_or_else(|| "Unknown".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use vivarium_core::AddressId;

    use super::*;

    fn stored_address(phone: Option<&str>) -> Address {
        Address {
            id: AddressId::new("addr-1"),
            street_address: "123 Gecko Way".to_string(),
            city: "Vancouver".to_string(),
            postal_code: "V6B 1A1".to_string(),
            country: "Canada".to_string(),
            phone: phone.map(String::from),
        }
    }

    #[test]
    fn test_country_code_mapping() {
        let ca = CarrierAddress::from_stored(&stored_address(None), true);
        assert_eq!(ca.country_code, "CA");

        let mut us_stored = stored_address(None);
        us_stored.country = "United States".to_string();
        let us = CarrierAddress::from_stored(&us_stored, true);
        assert_eq!(us.country_code, "US");
    }

    #[test]
    fn test_residential_and_business_stubs() {
        let residential = CarrierAddress::from_stored(&stored_address(None), true);
        assert_eq!(residential.tax_id, TAX_ID_RESIDENTIAL);
        assert_eq!(residential.appointment.phone, PHONE_FALLBACK_RESIDENTIAL);
        assert!(residential.residential);

        let business = CarrierAddress::from_stored(&stored_address(None), false);
        assert_eq!(business.tax_id, TAX_ID_BUSINESS);
        assert_eq!(business.appointment.phone, PHONE_FALLBACK_BUSINESS);
        assert!(!business.residential);
    }

    #[test]
    fn test_stored_phone_wins_over_fallback() {
        let formatted = CarrierAddress::from_stored(&stored_address(Some("604-555-0000")), true);
        assert_eq!(formatted.appointment.phone, "604-555-0000");
    }

    #[test]
    fn test_appointment_date_is_two_weeks_out() {
        let formatted = CarrierAddress::from_stored(&stored_address(None), true);
        let date = NaiveDate::parse_from_str(&formatted.appointment.date, "%Y-%m-%d").unwrap();
        let delta = date - Utc::now().date_naive();
        // Allow one day of slack around midnight boundaries.
        assert!((13..=15).contains(&delta.num_days()));
        assert_eq!(formatted.appointment.time, "3:00 PM");
        assert_eq!(formatted.appointment.appointment_type, "None");
    }

    #[test]
    fn test_request_wire_shape() {
        let from = CarrierAddress::from_stored(&stored_address(None), false);
        let to = CarrierAddress::from_stored(&stored_address(None), true);
        let package: PackageDescriptor = serde_json::from_value(serde_json::json!({
            "packageType": "MyPackage",
            "userDefinedPackageType": "Small",
            "weight": 1.5,
            "weightUnits": "Lbs",
            "length": 12, "width": 8, "height": 4,
            "dimUnits": "Inches",
            "insurance": 69.98,
            "isAdditionalHandling": false,
            "signatureOptions": "None",
            "description": "Online order",
            "temperatureProtection": false,
            "isDangerousGoods": false,
            "isNonStackable": false
        }))
        .unwrap();

        let request = RateRequest::single_package(from, to, package);
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["currencyCode"], "CAD");
        assert_eq!(json["billingOptions"], "Prepaid");
        assert_eq!(json["isDocumentsOnly"], false);
        assert_eq!(json["packages"].as_array().unwrap().len(), 1);
        assert!(json["packages"][0]["insurance"].is_number());
        assert!((json["packages"][0]["insurance"].as_f64().unwrap() - 69.98).abs() < 1e-9);
        assert_eq!(json["fromAddress"]["countryCode"], "CA");
        assert_eq!(json["fromAddress"]["isTailGate"], false);
        assert_eq!(json["fromAddress"]["isStopinOnly"], false);
        assert_eq!(json["toAddress"]["appointment"]["appointmentType"], "None");
    }

    #[test]
    fn test_rate_option_to_quote() {
        let option: RateOption = serde_json::from_value(serde_json::json!({
            "carrierCode": "UPS",
            "selectedService": "Standard",
            "serviceName": "UPS Standard",
            "total": 10.99,
            "deliveryTime": {"friendlyTime": "2 days"}
        }))
        .unwrap();

        let shipping_quote = ShippingQuote::from(option);
        assert_eq!(shipping_quote.id, "UPS-Standard");
        assert_eq!(shipping_quote.carrier, "UPS");
        assert_eq!(shipping_quote.service, "UPS Standard");
        assert_eq!(shipping_quote.estimated_delivery, "2 days");
    }

    #[test]
    fn test_missing_delivery_time_becomes_unknown() {
        let option: RateOption = serde_json::from_value(serde_json::json!({
            "carrierCode": "GLS",
            "selectedService": "Ground",
            "serviceName": "GLS Ground",
            "total": 8.25
        }))
        .unwrap();

        let shipping_quote = ShippingQuote::from(option);
        assert_eq!(shipping_quote.estimated_delivery, "Unknown");
    }
}
