//! Events and RSVPs.

use sea_orm::{DatabaseConnection, DatabaseTransaction, EntityTrait, TransactionTrait};
use tracing::{debug, info, instrument, warn};

use models::errors::ModelError;
use models::{event, event_rsvp};
use crate::errors::ServiceError;

/// Outcome of an RSVP request. Repeating an RSVP is not an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RsvpOutcome {
    /// A new RSVP was recorded and the attendee counter moved by one.
    Joined,
    /// The user had already RSVP'd; nothing changed.
    AlreadyJoined,
}

/// List all events.
pub async fn list_events(db: &DatabaseConnection) -> Result<Vec<event::Model>, ServiceError> {
    event::Entity::find()
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

/// Idempotent join. The existence check, the insert and the counter increment
/// share one transaction; the unique (event, user) index settles concurrent
/// duplicates, which then report [`RsvpOutcome::AlreadyJoined`].
///
/// An unknown `event_id` still records the RSVP; the counter update touches no row.
#[instrument(skip(db))]
pub async fn rsvp(db: &DatabaseConnection, event_id: &str, user_id: &str) -> Result<RsvpOutcome, ServiceError> {
    let txn = db.begin().await.map_err(|e| ServiceError::StorageWrite(e.to_string()))?;

    if event_rsvp::find(&txn, event_id, user_id).await?.is_some() {
        txn.commit().await.map_err(|e| ServiceError::Db(e.to_string()))?;
        debug!("already rsvp'd");
        return Ok(RsvpOutcome::AlreadyJoined);
    }

    record_rsvp(txn, event_id, user_id).await
}

/// Insert the RSVP and bump the counter, then commit. A unique violation means
/// a concurrent request recorded the same pair after our check; the
/// transaction is rolled back and nothing is counted.
async fn record_rsvp(txn: DatabaseTransaction, event_id: &str, user_id: &str) -> Result<RsvpOutcome, ServiceError> {
    match event_rsvp::create(&txn, event_id, user_id).await {
        Ok(_) => {}
        Err(ModelError::Conflict(msg)) => {
            warn!(detail = %msg, "concurrent rsvp for the same user won the race");
            if let Err(e) = txn.rollback().await {
                warn!(error = %e, "rollback after duplicate rsvp failed");
            }
            return Ok(RsvpOutcome::AlreadyJoined);
        }
        Err(e) => return Err(ServiceError::write(e)),
    }

    let touched = event::increment_attendees(&txn, event_id).await.map_err(ServiceError::write)?;
    if touched == 0 {
        debug!("rsvp recorded for unknown event, attendee counter unchanged");
    }

    txn.commit().await.map_err(|e| ServiceError::StorageWrite(e.to_string()))?;
    info!("rsvp recorded");
    Ok(RsvpOutcome::Joined)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{ColumnTrait, PaginatorTrait, QueryFilter};
    use crate::{seed, test_support::get_db};

    async fn rsvp_count(db: &DatabaseConnection, event_id: &str) -> Result<u64, anyhow::Error> {
        Ok(event_rsvp::Entity::find()
            .filter(event_rsvp::Column::EventId.eq(event_id))
            .count(db)
            .await?)
    }

    async fn track_day(db: &DatabaseConnection) -> Result<event::Model, anyhow::Error> {
        seed::seed_sample_events(db).await?;
        Ok(event::find_by_title(db, "Porsche Track Day").await?.expect("seeded"))
    }

    #[tokio::test]
    async fn repeated_rsvp_counts_once() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let ev = track_day(&db).await?;

        assert_eq!(rsvp(&db, &ev.id, "user-1").await?, RsvpOutcome::Joined);
        assert_eq!(rsvp(&db, &ev.id, "user-1").await?, RsvpOutcome::AlreadyJoined);

        let after = event::find_by_title(&db, "Porsche Track Day").await?.expect("seeded");
        assert_eq!(after.current_attendees, ev.current_attendees + 1);
        assert_eq!(rsvp_count(&db, &ev.id).await?, 1);
        Ok(())
    }

    #[tokio::test]
    async fn distinct_users_each_increment() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let ev = track_day(&db).await?;

        rsvp(&db, &ev.id, "user-1").await?;
        rsvp(&db, &ev.id, "user-2").await?;

        let after = event::find_by_title(&db, "Porsche Track Day").await?.expect("seeded");
        assert_eq!(after.current_attendees, ev.current_attendees + 2);
        Ok(())
    }

    #[tokio::test]
    async fn rsvp_to_unknown_event_is_recorded_without_counter() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        assert_eq!(rsvp(&db, "ghost-event", "user-1").await?, RsvpOutcome::Joined);
        assert_eq!(rsvp_count(&db, "ghost-event").await?, 1);
        assert!(list_events(&db).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn insert_losing_the_race_reports_already_joined() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let ev = track_day(&db).await?;

        // the other request commits between our existence check and our insert
        event_rsvp::create(&db, &ev.id, "user-1").await?;
        let txn = db.begin().await?;
        assert_eq!(record_rsvp(txn, &ev.id, "user-1").await?, RsvpOutcome::AlreadyJoined);

        let after = event::find_by_title(&db, "Porsche Track Day").await?.expect("seeded");
        assert_eq!(after.current_attendees, ev.current_attendees);
        assert_eq!(rsvp_count(&db, &ev.id).await?, 1);

        // the connection is usable again after the rollback
        assert_eq!(rsvp(&db, &ev.id, "user-2").await?, RsvpOutcome::Joined);
        Ok(())
    }

    #[tokio::test]
    async fn unique_index_rejects_duplicate_pair() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        event_rsvp::create(&db, "ev", "user-1").await?;
        let dup = event_rsvp::create(&db, "ev", "user-1").await.unwrap_err();
        assert!(matches!(dup, ModelError::Conflict(_)));
        Ok(())
    }
}
