//! Basket service types.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::Price;

/// Info codes the basket service uses for rejected promotions.
pub const PROMOTION_WARNING_CODES: [&str; 2] = ["notValidPromotion", "invalidCoupon"];

/// Coupon code attached to a basket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coupon {
    pub code: String,
}

/// Promotion applied to a basket.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Promotion {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub display_text: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub reference: Option<String>,
    #[serde(default)]
    pub valid_from: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub valid_to: Option<DateTime<FixedOffset>>,
}

/// Delivery option of a basket.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Delivery {
    /// Delivery method code (e.g. "collection", "postage")
    pub method: String,
    pub charge: Price,
}

/// One seat in a reservation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationItem {
    pub aggregate_reference: String,
    #[serde(default)]
    pub area_id: Option<String>,
    #[serde(default)]
    pub area_name: Option<String>,
    #[serde(default)]
    pub row: Option<String>,
    #[serde(default)]
    pub number: Option<String>,
    #[serde(default)]
    pub location_description: Option<String>,
}

/// Seats held for one product and performance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: u32,
    #[serde(default)]
    pub linked_reservation_id: Option<u32>,
    pub venue_id: String,
    #[serde(default)]
    pub venue_name: Option<String>,
    pub product_id: String,
    #[serde(default)]
    pub product_type: Option<String>,
    #[serde(default)]
    pub product_name: Option<String>,
    /// Performance date and time
    pub date: DateTime<FixedOffset>,
    pub quantity: u32,
    #[serde(default)]
    pub items: Vec<ReservationItem>,
    #[serde(default)]
    pub face_value_in_office_currency: Option<Price>,
    #[serde(default)]
    pub adjusted_sale_price_in_shopper_currency: Option<Price>,
}

/// Basket status as reported by the service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BasketStatus {
    #[default]
    Active,
    Expired,
    PendingPayment,
    Confirmed,
}

/// A basket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Basket {
    pub reference: String,
    #[serde(default)]
    pub checksum: Option<String>,
    pub channel_id: String,
    #[serde(default)]
    pub status: BasketStatus,
    #[serde(default)]
    pub mixed: bool,
    #[serde(default)]
    pub delivery: Option<Delivery>,
    #[serde(default)]
    pub allow_flexible_tickets: bool,
    #[serde(default)]
    pub shopper_currency: Option<String>,
    #[serde(default)]
    pub expired_at: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub reservations: Vec<Reservation>,
    #[serde(default)]
    pub coupon: Option<Coupon>,
    #[serde(default)]
    pub applied_promotion: Option<Promotion>,
}

impl Basket {
    /// Total seats across reservations.
    pub fn ticket_count(&self) -> u32 {
        self.reservations.iter().map(|r| r.quantity).sum()
    }
}

/// Seat to reserve.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationItemRequest {
    pub aggregate_reference: String,
}

/// Reservation to add to a basket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationRequest {
    pub date: DateTime<FixedOffset>,
    pub product_id: String,
    pub venue_id: String,
    pub quantity: u32,
    pub items: Vec<ReservationItemRequest>,
}

/// Body of `PATCH api/v1/baskets`: creates a basket or updates an existing one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertBasketRequest {
    /// Existing basket to update; `None` creates a new basket
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    pub channel_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery: Option<Delivery>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_flexible_tickets: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shopper_currency: Option<String>,
    pub reservations: Vec<ReservationRequest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon: Option<Coupon>,
}

impl UpsertBasketRequest {
    pub fn new(channel_id: impl Into<String>) -> Self {
        Self {
            channel_id: channel_id.into(),
            ..Default::default()
        }
    }

    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    pub fn with_reservation(mut self, reservation: ReservationRequest) -> Self {
        self.reservations.push(reservation);
        self
    }

    pub fn with_coupon(mut self, code: impl Into<String>) -> Self {
        self.coupon = Some(Coupon { code: code.into() });
        self
    }

    pub fn with_delivery(mut self, delivery: Delivery) -> Self {
        self.delivery = Some(delivery);
        self
    }
}

/// Body of `PATCH api/v1/baskets/{reference}/applyPromotion`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplyPromotionRequest {
    pub coupon: Coupon,
}
