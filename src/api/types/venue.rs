//! Venue service types.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueAddress {
    pub first_line: String,
    #[serde(default)]
    pub second_line: Option<String>,
    #[serde(default)]
    pub third_line: Option<String>,
    pub city: String,
    pub postcode: String,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
}

/// A venue.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    /// Identifier used across the other services
    pub internal_id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub address: Option<VenueAddress>,
    #[serde(default)]
    pub composite_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// "positive", "negative" or "neutral"
    #[serde(default)]
    pub intention: Option<String>,
}

/// Attributes of one seat (restricted view, aisle, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatAttribute {
    pub seat_identifier: String,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}
