use axum::{extract::{Path, State}, Json};
use serde::Serialize;
use service::booking_service;

use models::booking::{self, NewBooking};
use crate::{errors::JsonApiError, routes::ServerState};

#[derive(Debug, Serialize)]
pub struct BookingCreated { pub success: bool, pub booking_id: String }

#[utoipa::path(
    post, path = "/api/bookings", tag = "bookings",
    request_body = crate::openapi::NewBookingDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::BookingCreatedDoc),
        (status = 422, description = "Malformed body"),
        (status = 500, description = "Write Failed")
    )
)]
pub async fn create_booking(State(state): State<ServerState>, Json(input): Json<NewBooking>) -> Result<Json<BookingCreated>, JsonApiError> {
    let created = booking_service::create_booking(&state.db, input).await?;
    Ok(Json(BookingCreated { success: true, booking_id: created.id }))
}

#[utoipa::path(
    get, path = "/api/bookings/user/{user_id}", tag = "bookings",
    params(("user_id" = String, Path, description = "User ID")),
    responses((status = 200, description = "Bookings of the user, possibly empty"))
)]
pub async fn list_user_bookings(State(state): State<ServerState>, Path(user_id): Path<String>) -> Result<Json<Vec<booking::Model>>, JsonApiError> {
    Ok(Json(booking_service::list_user_bookings(&state.db, &user_id).await?))
}
