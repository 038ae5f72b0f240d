//! Venue service client.

use crate::api::error::ApiResult;
use crate::api::request::Method;
use crate::api::types::venue::{SeatAttribute, Venue};
use crate::client::{validate_not_blank, ServiceCore};
use crate::config::ApiContext;
use crate::network::Service;

#[derive(Debug, Clone)]
pub struct VenueServiceClient {
    core: ServiceCore,
}

impl VenueServiceClient {
    pub fn new(context: ApiContext) -> Self {
        Self {
            core: ServiceCore::new(Service::Venue, context),
        }
    }

    pub async fn get_venues(&self) -> ApiResult<Vec<Venue>> {
        let params = self.core.request(Method::Get, "api/v1/admin/venues").build();
        self.core.call(params).await
    }

    pub async fn get_venue(&self, venue_id: &str) -> ApiResult<Venue> {
        validate_not_blank(venue_id, "venue_id")?;
        let params = self
            .core
            .request(Method::Get, "api/v1/venues/{venueId}")
            .segment("venueId", venue_id)
            .build();
        self.core.call(params).await
    }

    /// Detailed attributes for every seat of a venue.
    pub async fn get_seat_attributes(&self, venue_id: &str) -> ApiResult<Vec<SeatAttribute>> {
        validate_not_blank(venue_id, "venue_id")?;
        let params = self
            .core
            .request(Method::Get, "api/v1/venues/{venueId}/seats/attributes/detailed")
            .segment("venueId", venue_id)
            .build();
        self.core.call(params).await
    }
}
