//! Checkout service client.

use crate::api::error::ApiResult;
use crate::api::request::Method;
use crate::api::types::checkout::{
    BookingConfirmation, CheckoutRequest, ConfirmBookingRequest, PaymentInfo,
};
use crate::client::{validate_not_blank, ServiceCore};
use crate::config::ApiContext;
use crate::network::Service;

#[derive(Debug, Clone)]
pub struct CheckoutServiceClient {
    core: ServiceCore,
}

impl CheckoutServiceClient {
    pub fn new(context: ApiContext) -> Self {
        Self {
            core: ServiceCore::new(Service::Checkout, context),
        }
    }

    /// Start payment for a basket.
    pub async fn checkout(&self, request: &CheckoutRequest) -> ApiResult<PaymentInfo> {
        validate_not_blank(&request.reference, "reference")?;
        validate_not_blank(&request.channel_id, "channel_id")?;
        validate_not_blank(&request.shopper.email, "shopper.email")?;
        let params = self
            .core
            .request(Method::Post, "api/checkout")
            .json_body(request)?
            .build();
        self.core.call(params).await
    }

    /// Confirm a booking on behalf of an agent.
    pub async fn confirm_booking(
        &self,
        agent_id: &str,
        booking_reference: &str,
        request: &ConfirmBookingRequest,
    ) -> ApiResult<BookingConfirmation> {
        validate_not_blank(agent_id, "agent_id")?;
        validate_not_blank(booking_reference, "booking_reference")?;
        validate_not_blank(&request.channel_id, "channel_id")?;
        let params = self
            .core
            .request(
                Method::Post,
                "api/agents/{agentId}/bookings/{bookingReference}/confirm",
            )
            .segment("agentId", agent_id)
            .segment("bookingReference", booking_reference)
            .json_body(request)?
            .build();
        self.core.call(params).await
    }
}
