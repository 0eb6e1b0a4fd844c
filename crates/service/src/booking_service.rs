use sea_orm::DatabaseConnection;
use tracing::{info, instrument};

use models::booking::{self, NewBooking};
use crate::errors::ServiceError;

/// Create a concierge service booking.
#[instrument(skip(db, input), fields(user_id = %input.user_id, car_id = %input.car_id))]
pub async fn create_booking(db: &DatabaseConnection, input: NewBooking) -> Result<booking::Model, ServiceError> {
    let created = booking::create(db, input).await.map_err(ServiceError::write)?;
    info!(booking_id = %created.id, pickup = ?created.pickup_type, "booking created");
    Ok(created)
}

/// List bookings made by a user.
pub async fn list_user_bookings(db: &DatabaseConnection, user_id: &str) -> Result<Vec<booking::Model>, ServiceError> {
    Ok(booking::list_by_user(db, user_id).await?)
}
