use chrono::Utc;
use regex::Regex;
use std::sync::Arc;
use uuid::Uuid;

use crate::models::itinerary::{Itinerary, ItineraryDay, ItineraryItem, ItemType};
use crate::models::trip::{TripRequest, TripTheme};
use crate::services::currency_service::CurrencyConverter;
use crate::services::extraction_service::{dedup_and_cap, extract_travel_info, ClassifiedContent};
use crate::services::fallback_data::{CostKind, FallbackCatalog};
use crate::services::query_service::compose_search_query;
use crate::services::tavily_search_service::{
    TavilyResponse, TavilySearchResult, TavilySearchService,
};

const MAX_TIPS: usize = 6;
const MAX_EXTRACTED_TIPS: usize = 3;

/// Group sizes above this get the group-discount tip
const GROUP_TIP_THRESHOLD: u32 = 3;

const MIN_DESCRIPTION_LEN: usize = 30;
const MAX_DESCRIPTION_LEN: usize = 150;

/// Composes complete itineraries from a trip request plus whatever live
/// search content is available. Composition itself never fails: every slot
/// falls back through extracted content, raw snippet titles, and the static
/// catalog until something resolves.
pub struct ItineraryGenerator {
    catalog: Arc<FallbackCatalog>,
    converter: CurrencyConverter,
    leading_superlative: Regex,
    trailing_place: Regex,
    trailing_dash: Regex,
}

impl ItineraryGenerator {
    pub fn new(catalog: Arc<FallbackCatalog>, converter: CurrencyConverter) -> Self {
        Self {
            catalog,
            converter,
            leading_superlative: Regex::new(r"(?i)^(Best|Top|The Best|The Top)\s+").unwrap(),
            trailing_place: Regex::new(r"(?i)\s+in\s+[^,]+$").unwrap(),
            trailing_dash: Regex::new(r"\s*-\s*.*$").unwrap(),
        }
    }

    /// Generate an itinerary, preferring live search content. A failed
    /// search call is absorbed here: the user still gets a full itinerary
    /// built from the static catalog.
    pub async fn generate_itinerary(
        &self,
        trip: &TripRequest,
        search: &TavilySearchService,
    ) -> Result<Itinerary, Box<dyn std::error::Error>> {
        let query = compose_search_query(trip);

        let response = match search.search_travel_content(query).await {
            Ok(response) => Some(response),
            Err(err) => {
                eprintln!(
                    "Tavily unavailable, using fallback data generation: {}",
                    err
                );
                None
            }
        };

        Ok(self.compose(trip, response.as_ref()))
    }

    /// Assemble the itinerary from the request and an optional search
    /// response (absent when the search call failed).
    pub fn compose(&self, trip: &TripRequest, response: Option<&TavilyResponse>) -> Itinerary {
        let results: &[TavilySearchResult] = response.map(|r| r.results.as_slice()).unwrap_or(&[]);
        let info = extract_travel_info(results);

        let days = (1..=trip.days)
            .map(|day_num| ItineraryDay {
                day: day_num,
                title: self.day_title(day_num, trip),
                items: self.day_items(day_num, trip, &info, results),
            })
            .collect();

        Itinerary {
            id: format!("itinerary-{}", Uuid::new_v4()),
            query: trip.clone(),
            title: self.title(trip),
            description: self.description(trip),
            days,
            total_budget: Some(self.budget_estimate(trip)),
            tips: self.tips(trip, &info),
            created_at: Utc::now(),
        }
    }

    fn title(&self, trip: &TripRequest) -> String {
        format!(
            "{}-Day {} {} Adventure",
            trip.days,
            trip.theme.label(),
            trip.destination
        )
    }

    fn description(&self, trip: &TripRequest) -> String {
        let people = if trip.group_size == 1 { "person" } else { "people" };
        format!(
            "Perfect {}-day {} itinerary for {} {} exploring the best of {}. \
             Carefully curated recommendations for an unforgettable experience.",
            trip.days,
            trip.theme.name(),
            trip.group_size,
            people,
            trip.destination
        )
    }

    fn day_title(&self, day_num: u32, trip: &TripRequest) -> String {
        if day_num == 1 {
            format!("Day {}: Essential {}", day_num, trip.destination)
        } else {
            format!("Day {}: {}", day_num, self.catalog.day_theme(trip.theme))
        }
    }

    fn day_items(
        &self,
        day_num: u32,
        trip: &TripRequest,
        info: &ClassifiedContent,
        results: &[TavilySearchResult],
    ) -> Vec<ItineraryItem> {
        if day_num == 1 {
            self.first_day_items(trip, info, results)
        } else {
            // Every day after the first shares one template.
            self.later_day_items(trip, info, results)
        }
    }

    /// Day 1: the iconic spots. Morning landmark, local lunch, afternoon
    /// culture, sunset dinner.
    fn first_day_items(
        &self,
        trip: &TripRequest,
        info: &ClassifiedContent,
        results: &[TavilySearchResult],
    ) -> Vec<ItineraryItem> {
        let catalog = &self.catalog;
        let destination = &trip.destination;
        let theme = trip.theme;

        vec![
            ItineraryItem {
                time: "9:00 AM".to_string(),
                activity: info
                    .attractions
                    .first()
                    .cloned()
                    .unwrap_or_else(|| catalog.main_attraction(destination)),
                location: catalog.main_attraction_location(destination),
                description: self.description_from_results(results, 0).unwrap_or_else(|| {
                    "Start your adventure at the most iconic landmark. Perfect for photos and getting oriented.".to_string()
                }),
                item_type: ItemType::Attraction,
                cost: Some(if theme == TripTheme::Budget {
                    "Free".to_string()
                } else {
                    self.converter.convert("$15-25")
                }),
            },
            ItineraryItem {
                time: "12:00 PM".to_string(),
                activity: info
                    .restaurants
                    .first()
                    .cloned()
                    .or_else(|| self.clean_title(results.get(1)))
                    .unwrap_or_else(|| "Local Lunch Spot".to_string()),
                location: catalog.neighborhood(destination, 1),
                description: self
                    .description_from_results(results, 1)
                    .unwrap_or_else(|| "Authentic local cuisine experience.".to_string()),
                item_type: ItemType::Food,
                cost: Some(self.slot_cost(theme, CostKind::Meal)),
            },
            ItineraryItem {
                time: "2:30 PM".to_string(),
                activity: info
                    .attractions
                    .get(1)
                    .cloned()
                    .or_else(|| self.clean_title(results.get(2)))
                    .unwrap_or_else(|| "Cultural Experience".to_string()),
                location: catalog.neighborhood(destination, 2),
                description: self
                    .description_from_results(results, 2)
                    .unwrap_or_else(|| "Immerse yourself in local culture and history.".to_string()),
                item_type: ItemType::Attraction,
                cost: Some(self.slot_cost(theme, CostKind::Attraction)),
            },
            ItineraryItem {
                time: "6:00 PM".to_string(),
                activity: "Sunset Viewing & Dinner".to_string(),
                location: catalog.best_viewpoint(destination),
                description: "End your first day watching the sunset from the best viewpoint, followed by dinner.".to_string(),
                item_type: ItemType::Activity,
                cost: Some(self.slot_cost(theme, CostKind::Dinner)),
            },
        ]
    }

    /// Days 2..N: deeper exploration. Market morning, food tour, the
    /// theme's special activity, farewell evening.
    fn later_day_items(
        &self,
        trip: &TripRequest,
        info: &ClassifiedContent,
        results: &[TavilySearchResult],
    ) -> Vec<ItineraryItem> {
        let catalog = &self.catalog;
        let destination = &trip.destination;
        let theme = trip.theme;

        vec![
            ItineraryItem {
                time: "10:00 AM".to_string(),
                activity: info
                    .activities
                    .first()
                    .cloned()
                    .or_else(|| self.clean_title(results.get(3)))
                    .unwrap_or_else(|| "Local Market Visit".to_string()),
                location: catalog.neighborhood(destination, 3),
                description: self.description_from_results(results, 3).unwrap_or_else(|| {
                    "Explore local markets and interact with vendors.".to_string()
                }),
                item_type: ItemType::Activity,
                cost: Some(self.slot_cost(theme, CostKind::Activity)),
            },
            ItineraryItem {
                time: "1:00 PM".to_string(),
                activity: info
                    .restaurants
                    .get(1)
                    .cloned()
                    .unwrap_or_else(|| "Neighborhood Food Tour".to_string()),
                location: catalog.neighborhood(destination, 4),
                description: self.description_from_results(results, 4).unwrap_or_else(|| {
                    "Discover hidden culinary gems in a charming local neighborhood.".to_string()
                }),
                item_type: ItemType::Food,
                cost: Some(self.slot_cost(theme, CostKind::Tour)),
            },
            ItineraryItem {
                time: "4:00 PM".to_string(),
                activity: info
                    .activities
                    .get(1)
                    .cloned()
                    .unwrap_or_else(|| catalog.theme_activity(theme).to_string()),
                location: catalog.neighborhood(destination, 5),
                description: self
                    .description_from_results(results, 5)
                    .unwrap_or_else(|| catalog.theme_activity_description(theme).to_string()),
                item_type: catalog.theme_activity_type(theme),
                cost: Some(self.slot_cost(theme, CostKind::Special)),
            },
            ItineraryItem {
                time: "7:30 PM".to_string(),
                activity: info
                    .attractions
                    .get(2)
                    .cloned()
                    .unwrap_or_else(|| "Farewell Experience".to_string()),
                location: "City Center".to_string(),
                description: self.description_from_results(results, 6).unwrap_or_else(|| {
                    "Perfect ending to your trip with a memorable local experience.".to_string()
                }),
                item_type: ItemType::Activity,
                cost: Some(self.slot_cost(theme, CostKind::Special)),
            },
        ]
    }

    fn slot_cost(&self, theme: TripTheme, kind: CostKind) -> String {
        self.converter.convert(self.catalog.budget_range(theme, kind))
    }

    /// Strip listicle noise from a raw snippet title: leading "Best"/"Top"
    /// superlatives, a trailing "in <place>" clause, and any dash suffix.
    fn clean_title(&self, result: Option<&TavilySearchResult>) -> Option<String> {
        let title = &result?.title;
        let cleaned = self.leading_superlative.replace(title, "");
        let cleaned = self.trailing_place.replace(&cleaned, "");
        let cleaned = self.trailing_dash.replace(&cleaned, "");
        let cleaned = cleaned.trim();

        if cleaned.is_empty() {
            None
        } else {
            Some(cleaned.to_string())
        }
    }

    /// First medium-length sentence of the snippet at `index`, else its
    /// truncated opening. None when there is no snippet there.
    fn description_from_results(
        &self,
        results: &[TavilySearchResult],
        index: usize,
    ) -> Option<String> {
        let content = &results.get(index)?.content;
        if content.is_empty() {
            return None;
        }

        for sentence in content.split(['.', '!', '?']) {
            let trimmed = sentence.trim();
            if trimmed.len() > MIN_DESCRIPTION_LEN && trimmed.len() < MAX_DESCRIPTION_LEN {
                return Some(format!("{}.", trimmed));
            }
        }

        let opening: String = content.chars().take(120).collect();
        Some(format!("{}...", opening.trim()))
    }

    fn budget_estimate(&self, trip: &TripRequest) -> String {
        let per_person = trip.theme.daily_estimate_usd() * trip.days;
        let total = per_person * trip.group_size;
        self.converter.format_budget(per_person, total)
    }

    fn tips(&self, trip: &TripRequest, info: &ClassifiedContent) -> Vec<String> {
        let mut tips = vec![
            format!(
                "Download offline maps for {} to navigate without data charges.",
                trip.destination
            ),
            "Book popular attractions in advance to skip long queues, especially during peak season.".to_string(),
        ];

        tips.extend(info.tips.iter().take(MAX_EXTRACTED_TIPS).cloned());

        match trip.theme {
            TripTheme::Budget => {
                tips.push("Look for lunch specials and happy hours to save money on meals.".to_string());
                tips.push("Many museums offer free admission on certain days - check their websites!".to_string());
            }
            TripTheme::Food => {
                tips.push("Ask locals for restaurant recommendations - they know the best hidden gems.".to_string());
                tips.push("Try street food for authentic flavors at great prices.".to_string());
            }
            TripTheme::Culture => {
                tips.push("Learn a few basic phrases in the local language to enhance cultural interactions.".to_string());
                tips.push("Visit cultural sites early in the morning or late afternoon for better lighting and fewer crowds.".to_string());
            }
            _ => {}
        }

        if trip.group_size > GROUP_TIP_THRESHOLD {
            tips.push(
                "Consider group discounts for tours and attractions - ask when booking.".to_string(),
            );
        }

        if trip.days == 1 {
            tips.push(
                "Pack light and wear comfortable shoes - you'll be doing a lot of walking!".to_string(),
            );
        } else {
            tips.push("Leave some flexibility in your schedule for spontaneous discoveries.".to_string());
        }

        dedup_and_cap(tips, MAX_TIPS)
    }
}
