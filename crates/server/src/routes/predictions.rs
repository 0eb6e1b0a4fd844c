use axum::{extract::{Path, State}, Json};
use service::prediction_service;

use models::car_health::MaintenanceForecast;
use crate::{errors::JsonApiError, routes::ServerState};

#[utoipa::path(
    post, path = "/api/ai-predictions/{car_id}", tag = "cars",
    params(("car_id" = String, Path, description = "Car ID")),
    responses((status = 200, description = "Forecast, also stored on the car's health record", body = crate::openapi::ForecastDoc))
)]
pub async fn refresh_predictions(State(state): State<ServerState>, Path(car_id): Path<String>) -> Result<Json<MaintenanceForecast>, JsonApiError> {
    Ok(Json(prediction_service::refresh_predictions(&state.db, &car_id).await?))
}
