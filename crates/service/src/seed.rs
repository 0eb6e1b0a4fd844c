//! One-shot reconciliation of the fixture events into the store.

use sea_orm::DatabaseConnection;
use tracing::{debug, info};

use models::errors::ModelError;
use models::event::NewEvent;
use models::{event, fixtures};
use crate::errors::ServiceError;

/// Insert every sample event whose title is not present yet. Returns how many
/// were inserted; running it again inserts nothing.
pub async fn seed_sample_events(db: &DatabaseConnection) -> Result<usize, ServiceError> {
    let mut inserted = 0;
    for sample in fixtures::sample_events() {
        if event::find_by_title(db, &sample.title).await?.is_some() {
            debug!(title = %sample.title, "sample event already present");
            continue;
        }
        if insert_sample(db, sample).await? {
            inserted += 1;
        }
    }
    info!(inserted, "sample events reconciled");
    Ok(inserted)
}

/// Insert one sample event. `false` when the unique title index shows another
/// seeder inserted it after our lookup.
async fn insert_sample(db: &DatabaseConnection, sample: NewEvent) -> Result<bool, ServiceError> {
    let title = sample.title.clone();
    match event::create(db, sample).await {
        Ok(created) => {
            debug!(event_id = %created.id, title = %title, "sample event inserted");
            Ok(true)
        }
        Err(ModelError::Conflict(_)) => {
            debug!(title = %title, "sample event inserted concurrently");
            Ok(false)
        }
        Err(e) => Err(ServiceError::write(e)),
    }
}
