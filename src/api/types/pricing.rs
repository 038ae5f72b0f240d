//! Pricing service types.

use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Page, Price};

/// Query parameters for `GET api/v3/admin/exchange_rates`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRateParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl ExchangeRateParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_currencies(mut self, base: impl Into<String>, target: impl Into<String>) -> Self {
        self.base_currency = Some(base.into());
        self.target_currency = Some(target.into());
        self
    }

    pub fn with_page(mut self, page: u32, limit: u32) -> Self {
        self.page = Some(page);
        self.limit = Some(limit);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRate {
    pub id: u32,
    pub base_currency: String,
    pub target_currency: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub rate: Decimal,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub protection_margin: Option<Decimal>,
    pub datetime_of_source_rate: DateTime<FixedOffset>,
}

/// Exchange rates page.
pub type ExchangeRates = Page<ExchangeRate>;

/// Price band for a performance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBand {
    pub price_band_code: String,
    pub ticket_type_code: String,
    #[serde(default)]
    pub display_currency: Option<String>,
    #[serde(default)]
    pub sale_price: Vec<Price>,
    #[serde(default)]
    pub face_value: Vec<Price>,
    #[serde(default)]
    pub is_offer: bool,
    #[serde(default)]
    pub percentage_saving: u32,
}

impl PriceBand {
    /// Sale price in `currency`, if quoted.
    pub fn sale_price_in(&self, currency: &str) -> Option<&Price> {
        self.sale_price.iter().find(|p| p.currency == currency)
    }
}
