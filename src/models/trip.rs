use serde::{Deserialize, Serialize};

pub const MIN_TRIP_DAYS: u32 = 1;
pub const MAX_TRIP_DAYS: u32 = 7;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TripRequest {
    pub destination: String,
    pub theme: TripTheme,
    pub days: u32,
    pub group_size: u32,
    pub additional_info: Option<String>,
}

impl TripRequest {
    /// Validate the submitted trip parameters, returning the first problem found.
    pub fn validate(&self) -> Result<(), String> {
        if self.destination.trim().is_empty() {
            return Err("Destination must not be empty.".to_string());
        }
        if self.days < MIN_TRIP_DAYS || self.days > MAX_TRIP_DAYS {
            return Err(format!(
                "Trip length must be between {} and {} days.",
                MIN_TRIP_DAYS, MAX_TRIP_DAYS
            ));
        }
        if self.group_size == 0 {
            return Err("Group size must be at least 1.".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TripTheme {
    Budget,
    Food,
    Culture,
    Nature,
    Luxury,
    Adventure,
}

impl TripTheme {
    /// Human-readable label used in itinerary titles
    pub fn label(&self) -> &'static str {
        match self {
            TripTheme::Budget => "Budget-Friendly",
            TripTheme::Food => "Foodie",
            TripTheme::Culture => "Cultural",
            TripTheme::Nature => "Nature",
            TripTheme::Luxury => "Luxury",
            TripTheme::Adventure => "Adventure",
        }
    }

    /// Lowercase name as it appears in search queries and descriptions
    pub fn name(&self) -> &'static str {
        match self {
            TripTheme::Budget => "budget",
            TripTheme::Food => "food",
            TripTheme::Culture => "culture",
            TripTheme::Nature => "nature",
            TripTheme::Luxury => "luxury",
            TripTheme::Adventure => "adventure",
        }
    }

    /// Per-person daily spend estimate in USD for this trip style
    pub fn daily_estimate_usd(&self) -> u32 {
        match self {
            TripTheme::Budget => 35,
            TripTheme::Food => 55,
            TripTheme::Culture => 45,
            TripTheme::Nature => 40,
            TripTheme::Luxury => 150,
            TripTheme::Adventure => 65,
        }
    }
}
