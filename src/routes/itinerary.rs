use actix_web::{web, HttpResponse, Responder};

use crate::models::trip::TripRequest;
use crate::services::itinerary_generation_service::ItineraryGenerator;
use crate::services::tavily_search_service::TavilySearchService;

/*
    /api/itineraries/generate
*/
pub async fn generate(
    input: web::Json<TripRequest>,
    generator: web::Data<ItineraryGenerator>,
    search: web::Data<Option<TavilySearchService>>,
) -> impl Responder {
    let trip = input.into_inner();

    if let Err(msg) = trip.validate() {
        return HttpResponse::BadRequest().body(msg);
    }

    // Missing credential is fatal; the fallback path only covers failed searches
    let search = match search.get_ref() {
        Some(service) => service,
        None => {
            return HttpResponse::ServiceUnavailable()
                .body("Search provider is not configured.")
        }
    };

    match generator.generate_itinerary(&trip, search).await {
        Ok(itinerary) => HttpResponse::Ok().json(itinerary),
        Err(err) => {
            eprintln!("Failed to generate itinerary: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to generate itinerary.")
        }
    }
}
