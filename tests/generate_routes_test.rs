use std::sync::Arc;

use actix_web::{test, web, App};
use serde_json::json;

use tripcraft_api::routes;
use tripcraft_api::services::currency_service::CurrencyConverter;
use tripcraft_api::services::fallback_data::FallbackCatalog;
use tripcraft_api::services::itinerary_generation_service::ItineraryGenerator;
use tripcraft_api::services::tavily_search_service::TavilySearchService;

fn generator_data() -> web::Data<ItineraryGenerator> {
    web::Data::new(ItineraryGenerator::new(
        Arc::new(FallbackCatalog::new()),
        CurrencyConverter::new(83.5),
    ))
}

/// App as deployed without a Tavily credential.
macro_rules! unconfigured_app {
    () => {
        test::init_service(
            App::new()
                .app_data(generator_data())
                .app_data(web::Data::new(None::<TavilySearchService>))
                .route("/health", web::get().to(routes::health::health_check))
                .service(web::scope("/api").service(web::scope("/itineraries").route(
                    "/generate",
                    web::post().to(routes::itinerary::generate),
                ))),
        )
        .await
    };
}

#[actix_web::test]
async fn test_health_reports_degraded_without_credential() {
    let app = unconfigured_app!();

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["services"]["tavily"]["status"], "unconfigured");
}

#[actix_web::test]
async fn test_generate_rejected_when_credential_missing() {
    let app = unconfigured_app!();

    let req = test::TestRequest::post()
        .uri("/api/itineraries/generate")
        .set_json(&json!({
            "destination": "Tokyo",
            "theme": "food",
            "days": 2,
            "group_size": 3,
            "additional_info": null
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 503);
}

#[actix_web::test]
async fn test_generate_validates_day_bounds() {
    let app = unconfigured_app!();

    let req = test::TestRequest::post()
        .uri("/api/itineraries/generate")
        .set_json(&json!({
            "destination": "Tokyo",
            "theme": "food",
            "days": 9,
            "group_size": 3,
            "additional_info": null
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_generate_validates_destination() {
    let app = unconfigured_app!();

    let req = test::TestRequest::post()
        .uri("/api/itineraries/generate")
        .set_json(&json!({
            "destination": "   ",
            "theme": "culture",
            "days": 2,
            "group_size": 2,
            "additional_info": null
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_generate_rejects_unknown_theme() {
    let app = unconfigured_app!();

    // serde rejects themes outside the fixed set before the handler runs
    let req = test::TestRequest::post()
        .uri("/api/itineraries/generate")
        .set_json(&json!({
            "destination": "Tokyo",
            "theme": "shopping",
            "days": 2,
            "group_size": 2,
            "additional_info": null
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}
