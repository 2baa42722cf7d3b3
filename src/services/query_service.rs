use chrono::{Datelike, Utc};

use crate::models::trip::{TripRequest, TripTheme};

/// Group sizes above this get group-oriented search terms added
const GROUP_TERM_THRESHOLD: u32 = 4;

/// Search terms appended per theme to steer the provider toward
/// the right kind of content.
pub fn theme_keywords(theme: TripTheme) -> [&'static str; 4] {
    match theme {
        TripTheme::Budget => ["cheap", "free", "budget-friendly", "affordable"],
        TripTheme::Food => ["restaurants", "local cuisine", "food markets", "dining"],
        TripTheme::Culture => [
            "museums",
            "historical sites",
            "cultural attractions",
            "art galleries",
        ],
        TripTheme::Nature => ["parks", "gardens", "outdoor activities", "nature spots"],
        TripTheme::Luxury => ["premium", "upscale", "luxury experiences", "high-end"],
        TripTheme::Adventure => [
            "activities",
            "adventure sports",
            "exciting experiences",
            "thrills",
        ],
    }
}

/// Build the natural-language search string sent to the provider.
/// Always produces a non-empty query for a non-empty destination.
pub fn compose_search_query(trip: &TripRequest) -> String {
    let base_query = format!(
        "best {} places to visit in {}",
        trip.theme.name(),
        trip.destination
    );

    let mut query_parts = vec![base_query];

    query_parts.extend(theme_keywords(trip.theme).iter().map(|s| s.to_string()));

    // Duration context
    if trip.days == 1 {
        query_parts.push("one day itinerary".to_string());
        query_parts.push("day trip".to_string());
    } else {
        query_parts.push(format!("{} days itinerary", trip.days));
        query_parts.push("weekend trip".to_string());
    }

    // Group context
    if trip.group_size > GROUP_TERM_THRESHOLD {
        query_parts.push("group activities".to_string());
        query_parts.push("group-friendly".to_string());
    }

    if let Some(info) = &trip.additional_info {
        if !info.trim().is_empty() {
            query_parts.push(info.clone());
        }
    }

    // Freshness terms keep the provider from serving stale listicles
    query_parts.push(Utc::now().year().to_string());
    query_parts.push("current".to_string());
    query_parts.push("updated".to_string());

    query_parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trip(theme: TripTheme, days: u32, group_size: u32) -> TripRequest {
        TripRequest {
            destination: "Barcelona".to_string(),
            theme,
            days,
            group_size,
            additional_info: None,
        }
    }

    #[test]
    fn test_query_contains_destination_and_theme_keyword() {
        let query = compose_search_query(&trip(TripTheme::Food, 3, 2));
        assert!(query.contains("Barcelona"));
        assert!(query.contains("best food places to visit in Barcelona"));
        assert!(theme_keywords(TripTheme::Food)
            .iter()
            .any(|kw| query.contains(kw)));
    }

    #[test]
    fn test_single_day_phrasing() {
        let query = compose_search_query(&trip(TripTheme::Culture, 1, 2));
        assert!(query.contains("one day itinerary"));
        assert!(query.contains("day trip"));
        assert!(!query.contains("weekend trip"));
    }

    #[test]
    fn test_multi_day_phrasing() {
        let query = compose_search_query(&trip(TripTheme::Culture, 4, 2));
        assert!(query.contains("4 days itinerary"));
        assert!(query.contains("weekend trip"));
    }

    #[test]
    fn test_group_terms_only_above_threshold() {
        assert!(compose_search_query(&trip(TripTheme::Nature, 2, 5)).contains("group-friendly"));
        assert!(!compose_search_query(&trip(TripTheme::Nature, 2, 4)).contains("group-friendly"));
    }

    #[test]
    fn test_additional_info_included_verbatim() {
        let mut request = trip(TripTheme::Luxury, 2, 2);
        request.additional_info = Some("rooftop bars with a view".to_string());
        let query = compose_search_query(&request);
        assert!(query.contains("rooftop bars with a view"));
    }

    #[test]
    fn test_freshness_terms_present() {
        let query = compose_search_query(&trip(TripTheme::Adventure, 2, 2));
        assert!(query.contains("current"));
        assert!(query.contains("updated"));
        assert!(query.contains(&Utc::now().year().to_string()));
    }
}
