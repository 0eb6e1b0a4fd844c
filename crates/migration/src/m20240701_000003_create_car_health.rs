//! Create `car_health` table keyed by `car_id` (one row per car).
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CarHealth::Table)
                    .if_not_exists()
                    .col(string_len(CarHealth::CarId, 36).primary_key())
                    .col(integer(CarHealth::OilStatus))
                    .col(integer(CarHealth::BrakeStatus))
                    .col(integer(CarHealth::BatteryStatus))
                    .col(integer(CarHealth::TireStatus))
                    .col(timestamp_with_time_zone(CarHealth::LastUpdated))
                    .col(json(CarHealth::AiPredictions))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(CarHealth::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum CarHealth { Table, CarId, OilStatus, BrakeStatus, BatteryStatus, TireStatus, LastUpdated, AiPredictions }
