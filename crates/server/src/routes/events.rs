use axum::{extract::{Path, Query, State}, Json};
use serde::{Deserialize, Serialize};
use service::event_service::{self, RsvpOutcome};

use models::event;
use crate::{errors::JsonApiError, routes::ServerState};

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RsvpQuery {
    /// User joining the event
    pub user_id: String,
}

#[derive(Debug, Serialize)]
pub struct RsvpResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<RsvpOutcome> for RsvpResponse {
    fn from(outcome: RsvpOutcome) -> Self {
        let message = match outcome {
            RsvpOutcome::Joined => None,
            RsvpOutcome::AlreadyJoined => Some("Already RSVP'd".to_string()),
        };
        Self { success: true, message }
    }
}

#[utoipa::path(
    get, path = "/api/events", tag = "events",
    responses((status = 200, description = "All events"))
)]
pub async fn list_events(State(state): State<ServerState>) -> Result<Json<Vec<event::Model>>, JsonApiError> {
    Ok(Json(event_service::list_events(&state.db).await?))
}

#[utoipa::path(
    post, path = "/api/events/{id}/rsvp", tag = "events",
    params(
        ("id" = String, Path, description = "Event ID"),
        RsvpQuery
    ),
    responses(
        (status = 200, description = "Joined, or already joined", body = crate::openapi::RsvpResponseDoc),
        (status = 400, description = "Missing user_id"),
        (status = 500, description = "Write Failed")
    )
)]
pub async fn rsvp(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Query(q): Query<RsvpQuery>,
) -> Result<Json<RsvpResponse>, JsonApiError> {
    let outcome = event_service::rsvp(&state.db, &id, &q.user_id).await?;
    Ok(Json(outcome.into()))
}
