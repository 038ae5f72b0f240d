//! Content service client.

use crate::api::error::ApiResult;
use crate::api::request::Method;
use crate::api::types::content::{ContentProduct, Location};
use crate::client::{validate_not_blank, ServiceCore};
use crate::config::ApiContext;
use crate::network::Service;

#[derive(Debug, Clone)]
pub struct ContentServiceClient {
    core: ServiceCore,
}

impl ContentServiceClient {
    pub fn new(context: ApiContext) -> Self {
        Self {
            core: ServiceCore::new(Service::Content, context),
        }
    }

    pub async fn get_products(&self) -> ApiResult<Vec<ContentProduct>> {
        let params = self.core.request(Method::Get, "api/v1/products").build();
        self.core.call(params).await
    }

    pub async fn get_product(&self, product_id: &str) -> ApiResult<ContentProduct> {
        validate_not_blank(product_id, "product_id")?;
        let params = self
            .core
            .request(Method::Get, "api/v1/products/{productId}")
            .segment("productId", product_id)
            .build();
        self.core.call(params).await
    }

    /// Top-level locations with their sub-locations.
    pub async fn get_locations(&self) -> ApiResult<Vec<Location>> {
        let params = self.core.request(Method::Get, "api/v1/locations").build();
        self.core.call(params).await
    }
}
