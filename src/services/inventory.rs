//! Inventory service client.

use chrono::{DateTime, FixedOffset, NaiveDate};

use crate::api::error::{ApiError, ApiResult};
use crate::api::request::Method;
use crate::api::types::inventory::{Availability, Performance, Product, ProductSearchResults};
use crate::client::{validate_not_blank, validate_quantity, ServiceCore};
use crate::config::ApiContext;
use crate::network::Service;

#[derive(Debug, Clone)]
pub struct InventoryServiceClient {
    core: ServiceCore,
}

impl InventoryServiceClient {
    pub fn new(context: ApiContext) -> Self {
        Self {
            core: ServiceCore::new(Service::Inventory, context),
        }
    }

    /// Free-text product search.
    pub async fn search_products(&self, text: &str) -> ApiResult<Vec<Product>> {
        validate_not_blank(text, "text")?;
        let params = self
            .core
            .request(Method::Get, "api/v2/search")
            .query("query", text)
            .build();
        self.core
            .execute::<ProductSearchResults>(params)
            .await
            .into_list()
    }

    /// Performances between `from` and `to` (inclusive) with `quantity` seats free.
    pub async fn get_performances(
        &self,
        product_id: &str,
        quantity: u32,
        from: NaiveDate,
        to: NaiveDate,
    ) -> ApiResult<Vec<Performance>> {
        validate_not_blank(product_id, "product_id")?;
        validate_quantity(quantity)?;
        if from > to {
            return Err(ApiError::InvalidParameter(
                "from must not be after to".to_string(),
            ));
        }
        let params = self
            .core
            .request(
                Method::Get,
                "api/v4/products/{productId}/quantity/{quantity}/from/{from}/to/{to}",
            )
            .segment("productId", product_id)
            .segment("quantity", quantity)
            .segment("from", from.format("%Y%m%d"))
            .segment("to", to.format("%Y%m%d"))
            .build();
        self.core.call(params).await
    }

    /// Seats available for one performance.
    pub async fn get_availability(
        &self,
        product_id: &str,
        quantity: u32,
        performance: DateTime<FixedOffset>,
    ) -> ApiResult<Availability> {
        validate_not_blank(product_id, "product_id")?;
        validate_quantity(quantity)?;
        let params = self
            .core
            .request(
                Method::Get,
                "api/v4/availability/products/{productId}/quantity/{quantity}/seats",
            )
            .segment("productId", product_id)
            .segment("quantity", quantity)
            .query("date", performance.format("%Y%m%d"))
            .query("time", performance.format("%H%M"))
            .build();
        self.core.call(params).await
    }
}
