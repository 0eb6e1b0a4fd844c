//! Create `event_rsvps` join table between users and events.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EventRsvps::Table)
                    .if_not_exists()
                    .col(string_len(EventRsvps::Id, 36).primary_key())
                    .col(string(EventRsvps::EventId))
                    .col(string(EventRsvps::UserId))
                    .col(timestamp_with_time_zone(EventRsvps::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(EventRsvps::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum EventRsvps { Table, Id, EventId, UserId, CreatedAt }
