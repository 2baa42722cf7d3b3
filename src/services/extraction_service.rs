use crate::services::tavily_search_service::TavilySearchResult;

const MAX_PER_CATEGORY: usize = 5;
const MAX_TIPS: usize = 8;

const MIN_TIP_LEN: usize = 20;
const MAX_TIP_LEN: usize = 150;

/// Search results bucketed by what kind of itinerary slot they can fill.
/// Lists keep first-occurrence order and are already deduplicated and capped.
#[derive(Debug, Clone, Default)]
pub struct ClassifiedContent {
    pub attractions: Vec<String>,
    pub restaurants: Vec<String>,
    pub activities: Vec<String>,
    pub tips: Vec<String>,
}

/// Classify raw search snippets with plain substring matching. The matching
/// is intentionally naive; anything smarter belongs in the search provider,
/// not here.
pub fn extract_travel_info(results: &[TavilySearchResult]) -> ClassifiedContent {
    let mut attractions = Vec::new();
    let mut restaurants = Vec::new();
    let mut activities = Vec::new();
    let mut tips = Vec::new();

    for result in results {
        let content = result.content.to_lowercase();
        let title = result.title.to_lowercase();

        if content.contains("restaurant")
            || content.contains("food")
            || content.contains("eat")
            || title.contains("restaurant")
        {
            restaurants.push(result.title.clone());
        } else if content.contains("museum")
            || content.contains("attraction")
            || content.contains("visit")
            || title.contains("museum")
        {
            attractions.push(result.title.clone());
        } else if content.contains("activity")
            || content.contains("experience")
            || content.contains("tour")
        {
            activities.push(result.title.clone());
        }
        // Snippets matching no category are dropped.

        for sentence in result.content.split(['.', '!', '?']) {
            if sentence.len() > MIN_TIP_LEN && sentence.len() < MAX_TIP_LEN {
                let lowered = sentence.to_lowercase();
                if lowered.contains("tip")
                    || lowered.contains("recommend")
                    || lowered.contains("best")
                    || lowered.contains("should")
                {
                    tips.push(sentence.trim().to_string());
                }
            }
        }
    }

    ClassifiedContent {
        attractions: dedup_and_cap(attractions, MAX_PER_CATEGORY),
        restaurants: dedup_and_cap(restaurants, MAX_PER_CATEGORY),
        activities: dedup_and_cap(activities, MAX_PER_CATEGORY),
        tips: dedup_and_cap(tips, MAX_TIPS),
    }
}

/// Drop repeated entries (keeping the first occurrence) and truncate.
pub fn dedup_and_cap(entries: Vec<String>, cap: usize) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    entries
        .into_iter()
        .filter(|entry| seen.insert(entry.clone()))
        .take(cap)
        .collect()
}
