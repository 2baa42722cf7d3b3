use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::trip::TripRequest;

/// Number of scheduled items in every generated day
pub const ITEMS_PER_DAY: usize = 4;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum ItemType {
    #[serde(rename = "attraction")]
    Attraction,
    #[serde(rename = "food")]
    Food,
    #[serde(rename = "activity")]
    Activity,
    #[serde(rename = "transport")]
    Transport,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ItineraryItem {
    pub time: String,
    pub activity: String,
    pub location: String,
    pub description: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ItineraryDay {
    pub day: u32,
    pub title: String,
    pub items: Vec<ItineraryItem>,
}

/// The full generated itinerary. Immutable once returned to the caller;
/// this is the whole contract the rendering layer depends on.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Itinerary {
    pub id: String,
    pub query: TripRequest,
    pub title: String,
    pub description: String,
    pub days: Vec<ItineraryDay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_budget: Option<String>,
    pub tips: Vec<String>,
    pub created_at: DateTime<Utc>,
}
