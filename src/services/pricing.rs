//! Pricing service client.

use chrono::{DateTime, FixedOffset};

use crate::api::error::ApiResult;
use crate::api::request::Method;
use crate::api::types::pricing::{ExchangeRate, ExchangeRateParams, ExchangeRates, PriceBand};
use crate::client::{validate_not_blank, validate_quantity, ServiceCore};
use crate::config::ApiContext;
use crate::network::Service;

#[derive(Debug, Clone)]
pub struct PricingServiceClient {
    core: ServiceCore,
}

impl PricingServiceClient {
    pub fn new(context: ApiContext) -> Self {
        Self {
            core: ServiceCore::new(Service::Pricing, context),
        }
    }

    /// Exchange rates, optionally filtered by currency pair.
    pub async fn get_exchange_rates(
        &self,
        params: &ExchangeRateParams,
    ) -> ApiResult<Vec<ExchangeRate>> {
        let request = self
            .core
            .request(Method::Get, "api/v3/admin/exchange_rates")
            .query_opt("baseCurrency", params.base_currency.as_deref())
            .query_opt("targetCurrency", params.target_currency.as_deref())
            .query_opt("page", params.page)
            .query_opt("limit", params.limit)
            .build();
        self.core
            .execute::<ExchangeRates>(request)
            .await
            .into_list()
    }

    /// Price bands for `quantity` tickets to one performance.
    pub async fn get_price_bands(
        &self,
        product_id: &str,
        quantity: u32,
        performance: DateTime<FixedOffset>,
    ) -> ApiResult<Vec<PriceBand>> {
        validate_not_blank(product_id, "product_id")?;
        validate_quantity(quantity)?;
        let params = self
            .core
            .request(
                Method::Get,
                "api/v2/products/{productId}/quantity/{quantity}/bands",
            )
            .segment("productId", product_id)
            .segment("quantity", quantity)
            .query("date", performance.format("%Y%m%d"))
            .query("time", performance.format("%H%M"))
            .build();
        self.core.call(params).await
    }
}
