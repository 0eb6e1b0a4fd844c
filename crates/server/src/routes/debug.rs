use axum::{extract::State, Json};
use serde::Serialize;
use service::seed;

use crate::{errors::JsonApiError, routes::ServerState};

#[derive(Debug, Serialize)]
pub struct SeedReport { pub success: bool, pub message: String }

/// Re-run the sample event reconciliation on demand.
#[utoipa::path(
    get, path = "/api/debug/init-events", tag = "debug",
    responses((status = 200, description = "Number of events inserted", body = crate::openapi::SeedReportDoc))
)]
pub async fn init_events(State(state): State<ServerState>) -> Result<Json<SeedReport>, JsonApiError> {
    let inserted = seed::seed_sample_events(&state.db).await?;
    Ok(Json(SeedReport { success: true, message: format!("Initialized {} sample events", inserted) }))
}
