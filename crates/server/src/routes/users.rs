use axum::{extract::{Path, State}, Json};
use serde::Serialize;
use service::user_service;

use models::user::{self, NewUser};
use crate::{errors::JsonApiError, routes::ServerState};

#[derive(Debug, Serialize)]
pub struct UserCreated { pub success: bool, pub user_id: String }

#[utoipa::path(
    post, path = "/api/users", tag = "users",
    request_body = crate::openapi::NewUserDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::UserCreatedDoc),
        (status = 422, description = "Malformed body"),
        (status = 500, description = "Write Failed")
    )
)]
pub async fn create_user(State(state): State<ServerState>, Json(input): Json<NewUser>) -> Result<Json<UserCreated>, JsonApiError> {
    let created = user_service::create_user(&state.db, input).await?;
    Ok(Json(UserCreated { success: true, user_id: created.id }))
}

#[utoipa::path(
    get, path = "/api/users/{id}", tag = "users",
    params(("id" = String, Path, description = "User ID")),
    responses(
        (status = 200, description = "OK"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get_user(State(state): State<ServerState>, Path(id): Path<String>) -> Result<Json<user::Model>, JsonApiError> {
    Ok(Json(user_service::get_user(&state.db, &id).await?))
}
