use axum::{
    routing::{get, post},
    Json, Router,
};
use sea_orm::DatabaseConnection;
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::HealthStatus;

use crate::openapi::ApiDoc;

pub mod users;
pub mod cars;
pub mod bookings;
pub mod events;
pub mod predictions;
pub mod debug;

/// Shared handler state. The pool is reference-counted, so cloning is cheap.
#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
}

#[utoipa::path(get, path = "/api/health", tag = "health", responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus::healthy())
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let api = Router::new()
        .route("/api/health", get(health))
        .route("/api/users", post(users::create_user))
        .route("/api/users/:id", get(users::get_user))
        .route("/api/cars", post(cars::add_car))
        .route("/api/cars/user/:user_id", get(cars::list_user_cars))
        .route("/api/car-health/:car_id", get(cars::get_car_health))
        .route("/api/bookings", post(bookings::create_booking))
        .route("/api/bookings/user/:user_id", get(bookings::list_user_bookings))
        .route("/api/events", get(events::list_events))
        .route("/api/events/:id/rsvp", post(events::rsvp))
        .route("/api/ai-predictions/:car_id", post(predictions::refresh_predictions))
        .route("/api/debug/init-events", get(debug::init_events));

    let docs = Router::new().route("/api-docs/openapi.json", get(openapi_json));

    api.merge(docs)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // one span per request at INFO
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // status code and latency
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 5xx at ERROR
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
