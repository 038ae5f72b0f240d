//! Content service types.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentVenue {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Editorial product record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentProduct {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub product_type: Option<String>,
    #[serde(default)]
    pub show_type: Option<String>,
    #[serde(default)]
    pub venue: Option<ContentVenue>,
    /// Running time in minutes
    #[serde(default)]
    pub run_time: Option<u32>,
    #[serde(default)]
    pub on_sale: Option<bool>,
}

/// A location with its sub-locations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub name: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub sub_locations: Vec<Location>,
}

impl Location {
    /// This location followed by all descendants, depth first.
    pub fn flatten(&self) -> Vec<&Location> {
        let mut out = vec![self];
        for sub in &self.sub_locations {
            out.extend(sub.flatten());
        }
        out
    }
}
