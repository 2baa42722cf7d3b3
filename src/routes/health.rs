use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use std::collections::HashMap;
use std::env;

use crate::services::tavily_search_service::TavilySearchService;

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    services: HashMap<String, ServiceStatus>,
    environment: String,
    version: String,
}

#[derive(Serialize, Clone)]
struct ServiceStatus {
    status: String,
    details: Option<String>,
}

pub async fn health_check(search: web::Data<Option<TavilySearchService>>) -> impl Responder {
    let mut health = HealthStatus {
        status: "ok".to_string(),
        services: HashMap::new(),
        environment: env::var("RUST_ENV").unwrap_or("development".to_string()),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    let tavily_status = if search.get_ref().is_some() {
        ServiceStatus {
            status: "configured".to_string(),
            details: None,
        }
    } else {
        health.status = "degraded".to_string();
        ServiceStatus {
            status: "unconfigured".to_string(),
            details: Some("TAVILY_API_KEY not set".to_string()),
        }
    };
    health.services.insert("tavily".to_string(), tavily_status);

    HttpResponse::Ok().json(health)
}
