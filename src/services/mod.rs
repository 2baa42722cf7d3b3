pub mod currency_service;
pub mod extraction_service;
pub mod fallback_data;
pub mod itinerary_generation_service;
pub mod query_service;
pub mod tavily_search_service;
