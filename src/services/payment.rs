//! Payment service client.

use crate::api::error::{ApiError, ApiResult};
use crate::api::request::Method;
use crate::api::types::payment::{CreateOrderRequest, Order, Refund, RefundRequest};
use crate::client::{validate_not_blank, ServiceCore};
use crate::config::ApiContext;
use crate::network::Service;

#[derive(Debug, Clone)]
pub struct PaymentServiceClient {
    core: ServiceCore,
}

impl PaymentServiceClient {
    pub fn new(context: ApiContext) -> Self {
        Self {
            core: ServiceCore::new(Service::Payment, context),
        }
    }

    /// Create a payment order.
    pub async fn create_order(&self, request: &CreateOrderRequest) -> ApiResult<Order> {
        validate_not_blank(&request.channel_id, "channel_id")?;
        validate_not_blank(&request.external_id, "external_id")?;
        if request.items.is_empty() {
            return Err(ApiError::InvalidParameter(
                "order must contain at least one item".to_string(),
            ));
        }
        let params = self
            .core
            .request(Method::Post, "api/v1/orders")
            .json_body(request)?
            .build();
        self.core.call(params).await
    }

    /// Look up an order by the caller's external id.
    pub async fn get_order(&self, channel_id: &str, external_id: &str) -> ApiResult<Order> {
        validate_not_blank(channel_id, "channel_id")?;
        validate_not_blank(external_id, "external_id")?;
        let params = self
            .core
            .request(Method::Get, "api/v1/orders/{channelId}/{externalId}")
            .segment("channelId", channel_id)
            .segment("externalId", external_id)
            .build();
        self.core.call(params).await
    }

    pub async fn refund_order(&self, order_id: &str, request: &RefundRequest) -> ApiResult<Refund> {
        validate_not_blank(order_id, "order_id")?;
        if request.amount.value <= 0 {
            return Err(ApiError::InvalidParameter(
                "refund amount must be positive".to_string(),
            ));
        }
        let params = self
            .core
            .request(Method::Post, "api/v1/orders/{orderId}/refunds")
            .segment("orderId", order_id)
            .json_body(request)?
            .build();
        self.core.call(params).await
    }
}
