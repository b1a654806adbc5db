//! Stored customer and store address records.

use serde::{Deserialize, Serialize};

use super::AddressId;

/// An address document as stored by the profile/checkout collaborators.
///
/// Distinct from the carrier-API address shape, which adds tax-id and
/// appointment stubs at rate-request time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(rename = "_id")]
    pub id: AddressId,
    pub street_address: String,
    pub city: String,
    pub postal_code: String,
    /// Country name as entered by the user (e.g., "Canada").
    pub country: String,
    #[serde(default)]
    pub phone: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_document_shape() {
        let json = serde_json::json!({
            "_id": "addr-1",
            "streetAddress": "123 Gecko Way",
            "city": "Vancouver",
            "postalCode": "V6B 1A1",
            "country": "Canada"
        });
        let address: Address = serde_json::from_value(json).unwrap();
        assert_eq!(address.city, "Vancouver");
        assert!(address.phone.is_none());
    }
}
