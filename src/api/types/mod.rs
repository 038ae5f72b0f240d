//! Request and response models for the Box Office services.
//!
//! One module per service. Shared money and paging types live here.

pub mod basket;
pub mod checkout;
pub mod content;
pub mod inventory;
pub mod payment;
pub mod pricing;
pub mod venue;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::api::result::ListWrapper;

/// A price in minor units.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Price {
    /// Amount in minor units (e.g. pence)
    pub value: i64,
    /// ISO 4217 currency code
    pub currency: String,
    /// Number of minor-unit decimal places
    #[serde(default = "default_decimal_places")]
    pub decimal_places: u32,
}

fn default_decimal_places() -> u32 {
    2
}

impl Price {
    pub fn new(value: i64, currency: impl Into<String>) -> Self {
        Self {
            value,
            currency: currency.into(),
            decimal_places: default_decimal_places(),
        }
    }

    /// Amount in major units, or `None` when `decimal_places` exceeds the
    /// largest scale a `Decimal` can hold.
    pub fn to_decimal(&self) -> Option<Decimal> {
        Decimal::try_new(self.value, self.decimal_places).ok()
    }
}

/// A page of results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "T: Deserialize<'de>"))]
pub struct Page<T> {
    #[serde(default)]
    pub items: Vec<T>,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub limit: u32,
}

impl<T> ListWrapper<T> for Page<T> {
    fn into_items(self) -> Vec<T> {
        self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_to_decimal() {
        let price = Price::new(4250, "GBP");
        assert_eq!(price.to_decimal(), Some(Decimal::new(4250, 2)));
        assert_eq!(price.to_decimal().unwrap().to_string(), "42.50");
    }

    #[test]
    fn test_price_with_oversized_scale_has_no_decimal() {
        let json = r#"{"value": 1000, "currency": "USD", "decimalPlaces": 40}"#;
        let price: Price = serde_json::from_str(json).unwrap();
        assert_eq!(price.to_decimal(), None);
    }

    #[test]
    fn test_price_deserialize_default_places() {
        let price: Price = serde_json::from_str(r#"{"value": 1000, "currency": "USD"}"#).unwrap();
        assert_eq!(price.decimal_places, 2);
    }

    #[test]
    fn test_page_of_type_without_default() {
        #[derive(Debug, PartialEq, Deserialize)]
        struct Rate {
            id: u32,
        }

        let page: Page<Rate> = serde_json::from_str(r#"{"items": [{"id": 7}]}"#).unwrap();
        assert_eq!(page.items, vec![Rate { id: 7 }]);
        assert_eq!(page.total, 0);
    }

    #[test]
    fn test_page_into_items() {
        let page: Page<u32> = serde_json::from_str(r#"{"items": [3, 1, 2], "total": 3}"#).unwrap();
        assert_eq!(page.into_items(), vec![3, 1, 2]);
    }
}
