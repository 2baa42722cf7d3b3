use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use tripcraft_api::routes;
use tripcraft_api::services::currency_service::CurrencyConverter;
use tripcraft_api::services::fallback_data::FallbackCatalog;
use tripcraft_api::services::itinerary_generation_service::ItineraryGenerator;
use tripcraft_api::services::tavily_search_service::TavilySearchService;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    }

    let host = std::env::var("HOST").unwrap_or_else(|_| HOST.to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| PORT.to_string())
        .parse()
        .unwrap_or(PORT);

    let search_service = match TavilySearchService::new() {
        Ok(service) => {
            println!("Tavily search service initialized");
            Some(service)
        }
        Err(err) => {
            eprintln!(
                "Tavily search not available: {}. Generation requests will be rejected.",
                err
            );
            None
        }
    };

    let generator = web::Data::new(ItineraryGenerator::new(
        Arc::new(FallbackCatalog::new()),
        CurrencyConverter::from_env(),
    ));
    let search_data = web::Data::new(search_service);

    println!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .app_data(generator.clone())
            .app_data(search_data.clone())
            .route("/health", web::get().to(routes::health::health_check))
            .service(web::scope("/api").service(web::scope("/itineraries").route(
                "/generate",
                web::post().to(routes::itinerary::generate),
            )))
    })
    .bind((host, port))?
    .run()
    .await
}
