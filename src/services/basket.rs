//! Basket service client.

use crate::api::error::ApiResult;
use crate::api::request::Method;
use crate::api::result::ApiResponse;
use crate::api::types::basket::{
    ApplyPromotionRequest, Basket, Coupon, Promotion, UpsertBasketRequest,
    PROMOTION_WARNING_CODES,
};
use crate::api::types::Page;
use crate::client::{validate_not_blank, ServiceCore};
use crate::config::ApiContext;
use crate::network::Service;

/// Baskets: create, update, promotions.
#[derive(Debug, Clone)]
pub struct BasketServiceClient {
    core: ServiceCore,
}

impl BasketServiceClient {
    pub fn new(context: ApiContext) -> Self {
        Self {
            core: ServiceCore::new(Service::Basket, context),
        }
    }

    /// Get a basket by reference.
    pub async fn get_basket(&self, reference: &str) -> ApiResult<Basket> {
        validate_not_blank(reference, "reference")?;
        let params = self
            .core
            .request(Method::Get, "api/v1/baskets/{reference}")
            .segment("reference", reference)
            .build();
        self.core.call(params).await
    }

    /// Create a basket, or update the one named by `request.reference`.
    pub async fn upsert_basket(&self, request: &UpsertBasketRequest) -> ApiResult<Basket> {
        validate_not_blank(&request.channel_id, "channel_id")?;
        if let Some(reference) = &request.reference {
            validate_not_blank(reference, "reference")?;
        }
        let params = self
            .core
            .request(Method::Patch, "api/v1/baskets")
            .json_body(request)?
            .build();
        self.core.call(params).await
    }

    /// Remove one reservation and return the updated basket.
    pub async fn remove_reservation(
        &self,
        reference: &str,
        reservation_id: u32,
    ) -> ApiResult<Basket> {
        validate_not_blank(reference, "reference")?;
        let params = self
            .core
            .request(
                Method::Delete,
                "api/v1/baskets/{reference}/reservations/{reservationId}",
            )
            .segment("reference", reference)
            .segment("reservationId", reservation_id)
            .build();
        self.core.call(params).await
    }

    /// Remove every reservation from a basket.
    pub async fn clear_basket(&self, reference: &str) -> ApiResult<Basket> {
        validate_not_blank(reference, "reference")?;
        let params = self
            .core
            .request(Method::Patch, "api/v1/baskets/{reference}/clear")
            .segment("reference", reference)
            .build();
        self.core.call(params).await
    }

    /// Apply a coupon.
    ///
    /// A rejected coupon is reported through `context.info` rather than
    /// `context.errors`; those entries are folded into the returned error.
    pub async fn apply_promotion(&self, reference: &str, coupon_code: &str) -> ApiResult<Basket> {
        self.apply_promotion_response(reference, coupon_code)
            .await?
            .data_or_error_with_warnings(&PROMOTION_WARNING_CODES)
    }

    /// Like [`apply_promotion`](Self::apply_promotion) without unwrapping.
    pub async fn apply_promotion_response(
        &self,
        reference: &str,
        coupon_code: &str,
    ) -> ApiResult<ApiResponse<Basket>> {
        validate_not_blank(reference, "reference")?;
        validate_not_blank(coupon_code, "coupon_code")?;
        let body = ApplyPromotionRequest {
            coupon: Coupon {
                code: coupon_code.to_string(),
            },
        };
        let params = self
            .core
            .request(Method::Patch, "api/v1/baskets/{reference}/applyPromotion")
            .segment("reference", reference)
            .json_body(&body)?
            .build();
        Ok(self.core.execute(params).await)
    }

    /// All active promotions.
    pub async fn get_promotions(&self, page: Option<u32>, limit: Option<u32>) -> ApiResult<Vec<Promotion>> {
        let params = self
            .core
            .request(Method::Get, "api/v1/promotions")
            .query_opt("page", page)
            .query_opt("limit", limit)
            .build();
        self.core
            .execute::<Page<Promotion>>(params)
            .await
            .into_list()
    }

    /// One promotion by id.
    pub async fn get_promotion(&self, promotion_id: &str) -> ApiResult<Promotion> {
        validate_not_blank(promotion_id, "promotion_id")?;
        let params = self
            .core
            .request(Method::Get, "api/v1/promotions/{promotionId}")
            .segment("promotionId", promotion_id)
            .build();
        self.core.call(params).await
    }
}
