use std::collections::HashMap;

use crate::models::itinerary::ItemType;
use crate::models::trip::TripTheme;

/// Kinds of spending an itinerary slot can incur, keyed into the
/// per-theme price tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CostKind {
    Meal,
    Dinner,
    Attraction,
    Activity,
    Tour,
    Special,
}

struct CityContent {
    main_attraction: &'static str,
    main_attraction_location: &'static str,
    viewpoint: &'static str,
    neighborhoods: &'static [&'static str],
}

const GENERIC_NEIGHBORHOODS: [&str; 5] = [
    "Downtown",
    "Old Town",
    "Arts District",
    "Market Area",
    "Historic Quarter",
];

/// Static pre-authored content, used whenever live search content is
/// missing or runs out. Built once at startup and shared read-only; the
/// seed data lives here rather than scattered through the composer so it
/// can move to an external config file without touching the pipeline.
pub struct FallbackCatalog {
    cities: HashMap<&'static str, CityContent>,
}

impl FallbackCatalog {
    pub fn new() -> Self {
        let mut cities = HashMap::new();

        cities.insert(
            "paris",
            CityContent {
                main_attraction: "Eiffel Tower & Trocadéro Gardens",
                main_attraction_location: "Champ de Mars, 7th Arrondissement",
                viewpoint: "Sacré-Cœur, Montmartre",
                neighborhoods: &[
                    "Montmartre",
                    "Le Marais",
                    "Latin Quarter",
                    "Saint-Germain",
                    "Belleville",
                ],
            },
        );
        cities.insert(
            "tokyo",
            CityContent {
                main_attraction: "Sensoji Temple & Asakusa District",
                main_attraction_location: "Asakusa, Taito City",
                viewpoint: "Tokyo Skytree Observation Deck",
                neighborhoods: &["Shibuya", "Harajuku", "Shinjuku", "Ginza", "Akihabara"],
            },
        );
        cities.insert(
            "rome",
            CityContent {
                main_attraction: "Colosseum & Roman Forum",
                main_attraction_location: "Palatine Hill, Historic Center",
                viewpoint: "Janiculum Hill",
                neighborhoods: &[
                    "Trastevere",
                    "Testaccio",
                    "Monti",
                    "Campo de' Fiori",
                    "Vatican Area",
                ],
            },
        );
        cities.insert(
            "london",
            CityContent {
                main_attraction: "Tower Bridge & Borough Market",
                main_attraction_location: "Tower Hamlets, South Bank",
                viewpoint: "Primrose Hill",
                neighborhoods: &GENERIC_NEIGHBORHOODS,
            },
        );
        cities.insert(
            "barcelona",
            CityContent {
                main_attraction: "Sagrada Familia & Park Güell",
                main_attraction_location: "Eixample & Park Güell",
                viewpoint: "Bunkers del Carmel",
                neighborhoods: &GENERIC_NEIGHBORHOODS,
            },
        );
        cities.insert(
            "amsterdam",
            CityContent {
                main_attraction: "Anne Frank House & Canal Walk",
                main_attraction_location: "Jordaan District",
                viewpoint: "City Overlook",
                neighborhoods: &GENERIC_NEIGHBORHOODS,
            },
        );

        Self { cities }
    }

    /// Signature landmark for the destination, or a generic main square.
    pub fn main_attraction(&self, destination: &str) -> String {
        match self.cities.get(destination.to_lowercase().as_str()) {
            Some(city) => city.main_attraction.to_string(),
            None => format!("{} Main Square", destination),
        }
    }

    pub fn main_attraction_location(&self, destination: &str) -> String {
        self.cities
            .get(destination.to_lowercase().as_str())
            .map(|city| city.main_attraction_location.to_string())
            .unwrap_or_else(|| "City Center".to_string())
    }

    /// Neighborhood label for a slot, cycling through the city's list.
    pub fn neighborhood(&self, destination: &str, index: usize) -> String {
        let neighborhoods = self
            .cities
            .get(destination.to_lowercase().as_str())
            .map(|city| city.neighborhoods)
            .unwrap_or(&GENERIC_NEIGHBORHOODS);
        neighborhoods[index % neighborhoods.len()].to_string()
    }

    pub fn best_viewpoint(&self, destination: &str) -> String {
        self.cities
            .get(destination.to_lowercase().as_str())
            .map(|city| city.viewpoint.to_string())
            .unwrap_or_else(|| "City Overlook".to_string())
    }

    /// The theme-specific special activity slotted into later afternoons.
    pub fn theme_activity(&self, theme: TripTheme) -> &'static str {
        match theme {
            TripTheme::Budget => "Free Museum Day",
            TripTheme::Food => "Cooking Class Experience",
            TripTheme::Culture => "Local Art Gallery Tour",
            TripTheme::Nature => "City Park & Gardens Walk",
            TripTheme::Luxury => "Premium Spa Experience",
            TripTheme::Adventure => "City Adventure Challenge",
        }
    }

    pub fn theme_activity_description(&self, theme: TripTheme) -> &'static str {
        match theme {
            TripTheme::Budget => {
                "Take advantage of free admission days and discover amazing collections without spending extra."
            }
            TripTheme::Food => {
                "Learn to prepare traditional dishes with local ingredients from a skilled chef."
            }
            TripTheme::Culture => {
                "Discover contemporary and traditional art in galleries frequented by locals."
            }
            TripTheme::Nature => {
                "Relax in beautiful green spaces and gardens away from the city bustle."
            }
            TripTheme::Luxury => {
                "Indulge in premium treatments and services for the ultimate relaxation."
            }
            TripTheme::Adventure => {
                "Challenge yourself with exciting activities that get your adrenaline pumping."
            }
        }
    }

    /// Item type of the theme-specific special activity.
    pub fn theme_activity_type(&self, theme: TripTheme) -> ItemType {
        match theme {
            TripTheme::Food => ItemType::Food,
            TripTheme::Culture => ItemType::Attraction,
            _ => ItemType::Activity,
        }
    }

    /// Per-theme day title for days beyond the first.
    pub fn day_theme(&self, theme: TripTheme) -> &'static str {
        match theme {
            TripTheme::Budget => "Hidden Gems",
            TripTheme::Food => "Culinary Journey",
            TripTheme::Culture => "Cultural Deep Dive",
            TripTheme::Nature => "Natural Wonders",
            TripTheme::Luxury => "Premium Experiences",
            TripTheme::Adventure => "Thrilling Activities",
        }
    }

    /// USD price range for a slot, in three buckets: budget trips, luxury
    /// trips, and everything else.
    pub fn budget_range(&self, theme: TripTheme, kind: CostKind) -> &'static str {
        match theme {
            TripTheme::Budget => match kind {
                CostKind::Meal => "$8-15",
                CostKind::Dinner => "$15-25",
                CostKind::Attraction => "Free-$10",
                CostKind::Activity => "$5-15",
                CostKind::Tour => "$20-30",
                CostKind::Special => "$10-20",
            },
            TripTheme::Luxury => match kind {
                CostKind::Meal => "$35-50",
                CostKind::Dinner => "$80-120",
                CostKind::Attraction => "$25-40",
                CostKind::Activity => "$50-80",
                CostKind::Tour => "$100-150",
                CostKind::Special => "$150-250",
            },
            _ => match kind {
                CostKind::Meal => "$15-25",
                CostKind::Dinner => "$30-45",
                CostKind::Attraction => "$15-25",
                CostKind::Activity => "$20-35",
                CostKind::Tour => "$40-60",
                CostKind::Special => "$50-75",
            },
        }
    }
}

impl Default for FallbackCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_city_lookup_is_case_insensitive() {
        let catalog = FallbackCatalog::new();
        assert_eq!(
            catalog.main_attraction("Tokyo"),
            "Sensoji Temple & Asakusa District"
        );
        assert_eq!(
            catalog.main_attraction("TOKYO"),
            catalog.main_attraction("tokyo")
        );
    }

    #[test]
    fn test_unknown_city_gets_generic_content() {
        let catalog = FallbackCatalog::new();
        assert_eq!(catalog.main_attraction("Reykjavik"), "Reykjavik Main Square");
        assert_eq!(catalog.main_attraction_location("Reykjavik"), "City Center");
        assert_eq!(catalog.best_viewpoint("Reykjavik"), "City Overlook");
        assert_eq!(catalog.neighborhood("Reykjavik", 1), "Old Town");
    }

    #[test]
    fn test_neighborhood_index_wraps() {
        let catalog = FallbackCatalog::new();
        assert_eq!(
            catalog.neighborhood("paris", 0),
            catalog.neighborhood("paris", 5)
        );
    }

    #[test]
    fn test_budget_theme_buckets() {
        let catalog = FallbackCatalog::new();
        assert_eq!(
            catalog.budget_range(TripTheme::Budget, CostKind::Meal),
            "$8-15"
        );
        assert_eq!(
            catalog.budget_range(TripTheme::Luxury, CostKind::Special),
            "$150-250"
        );
        // Non-budget, non-luxury themes share the default bucket
        assert_eq!(
            catalog.budget_range(TripTheme::Food, CostKind::Dinner),
            catalog.budget_range(TripTheme::Nature, CostKind::Dinner)
        );
    }

    #[test]
    fn test_theme_activity_type_mapping() {
        let catalog = FallbackCatalog::new();
        assert_eq!(catalog.theme_activity_type(TripTheme::Food), ItemType::Food);
        assert_eq!(
            catalog.theme_activity_type(TripTheme::Culture),
            ItemType::Attraction
        );
        assert_eq!(
            catalog.theme_activity_type(TripTheme::Adventure),
            ItemType::Activity
        );
    }
}
