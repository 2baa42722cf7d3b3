use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::env;
use std::error::Error;
use std::fmt;

const TAVILY_API_URL: &str = "https://api.tavily.com/search";

/// Travel sites the generation flow restricts searches to
pub const TRAVEL_DOMAINS: [&str; 5] = [
    "tripadvisor.com",
    "lonelyplanet.com",
    "timeout.com",
    "fodors.com",
    "frommers.com",
];

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SearchDepth {
    Basic,
    Advanced,
}

#[derive(Debug, Serialize)]
pub struct TavilySearchRequest {
    pub query: String,
    pub search_depth: SearchDepth,
    pub include_answer: bool,
    pub include_images: bool,
    pub include_raw_content: bool,
    pub max_results: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_domains: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_domains: Option<Vec<String>>,
}

impl Default for TavilySearchRequest {
    fn default() -> Self {
        Self {
            query: String::new(),
            search_depth: SearchDepth::Basic,
            include_answer: true,
            include_images: false,
            include_raw_content: false,
            max_results: 10,
            include_domains: None,
            exclude_domains: None,
        }
    }
}

/// What actually goes over the wire: the request plus the API key,
/// which Tavily takes in the body rather than a header.
#[derive(Debug, Serialize)]
struct TavilySearchPayload<'a> {
    api_key: &'a str,
    #[serde(flatten)]
    request: &'a TavilySearchRequest,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TavilySearchResult {
    pub title: String,
    pub content: String,
    pub url: String,
    pub score: f64,
    pub published_date: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TavilyResponse {
    pub query: String,
    pub results: Vec<TavilySearchResult>,
    pub answer: Option<String>,
    pub images: Option<Vec<String>>,
}

#[derive(Debug)]
pub enum TavilySearchError {
    EnvironmentError(String),
    HttpError(reqwest::Error),
    ResponseError(String),
}

impl fmt::Display for TavilySearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TavilySearchError::EnvironmentError(msg) => write!(f, "Environment error: {}", msg),
            TavilySearchError::HttpError(err) => write!(f, "HTTP error: {}", err),
            TavilySearchError::ResponseError(msg) => write!(f, "Response error: {}", msg),
        }
    }
}

impl Error for TavilySearchError {}

impl From<reqwest::Error> for TavilySearchError {
    fn from(err: reqwest::Error) -> Self {
        TavilySearchError::HttpError(err)
    }
}

#[derive(Clone)]
pub struct TavilySearchService {
    client: Client,
    api_key: String,
}

impl TavilySearchService {
    pub fn new() -> Result<Self, TavilySearchError> {
        let api_key = env::var("TAVILY_API_KEY").map_err(|_| {
            TavilySearchError::EnvironmentError("TAVILY_API_KEY not set".to_string())
        })?;

        Ok(Self {
            client: Client::new(),
            api_key,
        })
    }

    /// Issue one search call to Tavily. Any transport failure or non-2xx
    /// status surfaces as an error; callers decide whether that is fatal.
    pub async fn search(
        &self,
        request: &TavilySearchRequest,
    ) -> Result<TavilyResponse, TavilySearchError> {
        let payload = TavilySearchPayload {
            api_key: &self.api_key,
            request,
        };

        let response = self
            .client
            .post(TAVILY_API_URL)
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(TavilySearchError::ResponseError(format!(
                "Search request failed with status {}: {}",
                status, error_text
            )));
        }

        let search_response: TavilyResponse = response.json().await.map_err(|e| {
            TavilySearchError::ResponseError(format!("Failed to parse response: {}", e))
        })?;

        Ok(search_response)
    }

    /// Search configured for itinerary generation: advanced depth, more
    /// results, restricted to established travel sites.
    pub async fn search_travel_content(
        &self,
        query: String,
    ) -> Result<TavilyResponse, TavilySearchError> {
        let request = TavilySearchRequest {
            query,
            search_depth: SearchDepth::Advanced,
            max_results: 15,
            include_domains: Some(TRAVEL_DOMAINS.iter().map(|d| d.to_string()).collect()),
            ..Default::default()
        };

        self.search(&request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_wire_names() {
        let request = TavilySearchRequest {
            query: "best food places to visit in Tokyo".to_string(),
            search_depth: SearchDepth::Advanced,
            max_results: 15,
            include_domains: Some(vec!["tripadvisor.com".to_string()]),
            ..Default::default()
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["search_depth"], "advanced");
        assert_eq!(value["max_results"], 15);
        assert_eq!(value["include_answer"], true);
        assert_eq!(value["include_images"], false);
        assert!(value.get("exclude_domains").is_none());
    }

    #[test]
    fn test_payload_flattens_request_beside_key() {
        let request = TavilySearchRequest::default();
        let payload = TavilySearchPayload {
            api_key: "tvly-test",
            request: &request,
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["api_key"], "tvly-test");
        assert_eq!(value["search_depth"], "basic");
    }

    #[test]
    fn test_response_parses_optional_fields() {
        let raw = r#"{
            "query": "best culture places to visit in Rome",
            "results": [
                {
                    "title": "Top Museums in Rome",
                    "content": "The Vatican Museums are a must visit.",
                    "url": "https://example.com/rome",
                    "score": 0.93
                }
            ],
            "answer": "Visit the Vatican Museums."
        }"#;

        let response: TavilyResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.results.len(), 1);
        assert!(response.results[0].published_date.is_none());
        assert!(response.images.is_none());
        assert_eq!(response.answer.as_deref(), Some("Visit the Vatican Museums."));
    }
}
