use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Cars: list by owner
        manager
            .create_index(
                Index::create()
                    .name("idx_cars_user")
                    .table(Cars::Table)
                    .col(Cars::UserId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // Bookings: list by owner
        manager
            .create_index(
                Index::create()
                    .name("idx_bookings_user")
                    .table(Bookings::Table)
                    .col(Bookings::UserId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // Events: fixtures are deduplicated by title
        manager
            .create_index(
                Index::create()
                    .name("uniq_events_title")
                    .table(Events::Table)
                    .col(Events::Title)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // EventRsvps: at most one RSVP per (event, user)
        manager
            .create_index(
                Index::create()
                    .name("uniq_event_rsvps_event_user")
                    .table(EventRsvps::Table)
                    .col(EventRsvps::EventId)
                    .col(EventRsvps::UserId)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_cars_user").table(Cars::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_bookings_user").table(Bookings::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("uniq_events_title").table(Events::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("uniq_event_rsvps_event_user").table(EventRsvps::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Cars { Table, UserId }

#[derive(DeriveIden)]
enum Bookings { Table, UserId }

#[derive(DeriveIden)]
enum Events { Table, Title }

#[derive(DeriveIden)]
enum EventRsvps { Table, EventId, UserId }
