//! Create `bookings` table for concierge service appointments.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(table()).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Bookings::Table).to_owned()).await
    }
}

/// Client-supplied text columns are unbounded; only ids and enum columns carry a length.
fn table() -> TableCreateStatement {
    Table::create()
        .table(Bookings::Table)
        .if_not_exists()
        .col(string_len(Bookings::Id, 36).primary_key())
        .col(string(Bookings::UserId))
        .col(string(Bookings::CarId))
        .col(string(Bookings::ServiceType))
        .col(string_len(Bookings::PickupType, 32))
        .col(string(Bookings::AppointmentDate))
        .col(string(Bookings::AppointmentTime))
        .col(string(Bookings::Status))
        .col(text(Bookings::SpecialInstructions))
        .to_owned()
}

#[derive(DeriveIden)]
enum Bookings {
    Table,
    Id,
    UserId,
    CarId,
    ServiceType,
    PickupType,
    AppointmentDate,
    AppointmentTime,
    Status,
    SpecialInstructions,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_text_columns_have_no_length_cap() {
        let sql = table().to_string(PostgresQueryBuilder);
        for col in ["status", "appointment_date", "appointment_time", "service_type"] {
            assert!(!sql.contains(&format!("\"{col}\" varchar(")), "{col} is length-capped: {sql}");
        }
        assert!(sql.contains("\"pickup_type\" varchar(32)"));
    }
}
