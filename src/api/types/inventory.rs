//! Inventory service types.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::Price;
use crate::api::result::ListWrapper;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueRef {
    pub id: String,
}

/// Product found by a search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub product_type: String,
    #[serde(default)]
    pub venue: Option<VenueRef>,
    #[serde(default)]
    pub on_sale: Option<String>,
}

/// Search results, grouped the way the service returns them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSearchResults {
    #[serde(default)]
    pub product: Vec<Product>,
}

impl ListWrapper<Product> for ProductSearchResults {
    fn into_items(self) -> Vec<Product> {
        self.product
    }
}

/// A bookable performance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Performance {
    pub date: DateTime<FixedOffset>,
    #[serde(default)]
    pub large_capacity_available: bool,
    #[serde(default)]
    pub is_limited_availability: bool,
}

/// Contiguous block of seats sold together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grouping {
    pub grouping_id: String,
    #[serde(default)]
    pub row: Option<String>,
    #[serde(default)]
    pub seat_number_start: Option<u32>,
    #[serde(default)]
    pub seat_number_end: Option<u32>,
    pub available_count: u32,
    pub is_available: bool,
    #[serde(default)]
    pub pricing: Option<Price>,
    /// Reference used to reserve these seats
    pub aggregate_reference: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Area {
    pub area_id: String,
    pub name: String,
    #[serde(default)]
    pub display_name: Option<String>,
    pub available_count: u32,
    #[serde(default)]
    pub groupings: Vec<Grouping>,
}

/// Seat availability for one performance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Availability {
    pub is_available: bool,
    #[serde(default)]
    pub areas: Vec<Area>,
}

impl Availability {
    /// Every grouping across areas, in area order.
    pub fn groupings(&self) -> impl Iterator<Item = &Grouping> {
        self.areas.iter().flat_map(|a| a.groupings.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_availability_groupings_flattened_in_order() {
        let json = r#"{
            "isAvailable": true,
            "areas": [
                {"areaId": "STALLS", "name": "Stalls", "availableCount": 3, "groupings": [
                    {"groupingId": "g1", "availableCount": 2, "isAvailable": true, "aggregateReference": "r1"},
                    {"groupingId": "g2", "availableCount": 1, "isAvailable": true, "aggregateReference": "r2"}
                ]},
                {"areaId": "CIRCLE", "name": "Circle", "availableCount": 1, "groupings": [
                    {"groupingId": "g3", "availableCount": 1, "isAvailable": false, "aggregateReference": "r3",
                     "pricing": {"value": 5500, "currency": "GBP"}}
                ]}
            ]
        }"#;
        let availability: Availability = serde_json::from_str(json).unwrap();
        let ids: Vec<_> = availability.groupings().map(|g| g.grouping_id.as_str()).collect();
        assert_eq!(ids, ["g1", "g2", "g3"]);
        assert_eq!(
            availability.areas[1].groupings[0].pricing,
            Some(Price::new(5500, "GBP"))
        );
    }
}
