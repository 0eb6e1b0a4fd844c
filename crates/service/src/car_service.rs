//! Cars and their health snapshots.
//!
//! A car and its baseline health record are written in one transaction, so a
//! car is never visible without its health row.

use sea_orm::{DatabaseConnection, EntityTrait, TransactionTrait};
use tracing::{error, info, instrument, warn};

use models::car::{self, NewCar};
use models::car_health::{self, HealthScores};
use crate::errors::ServiceError;

/// Add a car and seed its health record with the baseline scores.
#[instrument(skip(db, input), fields(user_id = %input.user_id, vin = %input.vin))]
pub async fn add_car(db: &DatabaseConnection, input: NewCar) -> Result<car::Model, ServiceError> {
    let scores = HealthScores::baseline().map_err(ServiceError::write)?;
    let txn = db.begin().await.map_err(|e| ServiceError::StorageWrite(e.to_string()))?;

    let created = car::create(&txn, input).await.map_err(ServiceError::write)?;

    let seeded = car_health::create(
        &txn,
        &created.id,
        scores,
        car_health::baseline_predictions(),
    )
    .await;
    if let Err(e) = seeded {
        warn!(car_id = %created.id, error = %e, "health record insert failed, rolling back car");
        if let Err(rb) = txn.rollback().await {
            error!(car_id = %created.id, error = %rb, "rollback failed");
        }
        return Err(ServiceError::PartialCreate { car_id: created.id, reason: e.to_string() });
    }

    txn.commit().await.map_err(|e| ServiceError::StorageWrite(e.to_string()))?;
    info!(car_id = %created.id, "car added with baseline health");
    Ok(created)
}

/// List cars owned by a user. Empty when the user has none (or does not exist).
pub async fn list_user_cars(db: &DatabaseConnection, user_id: &str) -> Result<Vec<car::Model>, ServiceError> {
    Ok(car::list_by_user(db, user_id).await?)
}

/// Get the health snapshot of a car.
pub async fn get_car_health(db: &DatabaseConnection, car_id: &str) -> Result<car_health::Model, ServiceError> {
    car_health::Entity::find_by_id(car_id.to_string())
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("Car health data"))
}
