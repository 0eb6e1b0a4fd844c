use axum::{extract::{Path, State}, Json};
use serde::Serialize;
use service::car_service;
use tracing::info;

use models::car::{self, NewCar};
use models::car_health;
use crate::{errors::JsonApiError, routes::ServerState};

#[derive(Debug, Serialize)]
pub struct CarAdded { pub success: bool, pub car_id: String }

#[utoipa::path(
    post, path = "/api/cars", tag = "cars",
    request_body = crate::openapi::NewCarDoc,
    responses(
        (status = 200, description = "Car and baseline health record created", body = crate::openapi::CarAddedDoc),
        (status = 422, description = "Malformed body"),
        (status = 500, description = "Write Failed")
    )
)]
pub async fn add_car(State(state): State<ServerState>, Json(input): Json<NewCar>) -> Result<Json<CarAdded>, JsonApiError> {
    let created = car_service::add_car(&state.db, input).await?;
    Ok(Json(CarAdded { success: true, car_id: created.id }))
}

#[utoipa::path(
    get, path = "/api/cars/user/{user_id}", tag = "cars",
    params(("user_id" = String, Path, description = "Owner ID")),
    responses((status = 200, description = "Cars of the user, possibly empty"))
)]
pub async fn list_user_cars(State(state): State<ServerState>, Path(user_id): Path<String>) -> Result<Json<Vec<car::Model>>, JsonApiError> {
    let cars = car_service::list_user_cars(&state.db, &user_id).await?;
    info!(count = cars.len(), "list user cars");
    Ok(Json(cars))
}

#[utoipa::path(
    get, path = "/api/car-health/{car_id}", tag = "cars",
    params(("car_id" = String, Path, description = "Car ID")),
    responses(
        (status = 200, description = "OK"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get_car_health(State(state): State<ServerState>, Path(car_id): Path<String>) -> Result<Json<car_health::Model>, JsonApiError> {
    Ok(Json(car_service::get_car_health(&state.db, &car_id).await?))
}
