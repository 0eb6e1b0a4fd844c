use std::future::Future;

use axum::Router;
use configs::{AppConfig, DatabaseConfig};
use dotenvy::dotenv;
use migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use crate::errors::StartupError;
use crate::routes::{self, ServerState};
use service::seed;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Open the pool, bootstrap the schema and reconcile the fixture events.
/// Runs once per process before any request is accepted.
pub async fn prepare(cfg: &DatabaseConfig) -> anyhow::Result<ServerState> {
    let db = models::db::connect_with_config(cfg).await?;
    migration::Migrator::up(&db, None)
        .await
        .map_err(|e| StartupError::Migration(e.to_string()))?;
    let inserted = seed::seed_sample_events(&db).await?;
    info!(inserted, "startup seed complete");
    Ok(ServerState { db })
}

pub fn build_app(state: ServerState) -> Router {
    routes::build_router(state, build_cors())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to listen for Ctrl+C");
        return;
    }
    info!(service = "server", event = "shutdown_signal", "received Ctrl+C, draining connections");
}

/// Public entry: serve until Ctrl+C.
pub async fn run() -> anyhow::Result<()> {
    run_until(shutdown_signal()).await
}

/// Build the app and serve until `shutdown` resolves, then close the pool.
pub async fn run_until<F>(shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    dotenv().ok();

    let cfg = AppConfig::load_and_validate().map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
    let state = prepare(&cfg.database).await?;
    let db = state.db.clone();
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(cfg.server.bind_addr()).await?;
    let addr = listener.local_addr()?;
    info!(%addr, "starting server crate");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("listener drained, closing database pool");
    db.close().await?;
    Ok(())
}
