//! Create `events` table. `brands_filter` holds a JSON array of brand names.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(table()).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Events::Table).to_owned()).await
    }
}

fn table() -> TableCreateStatement {
    Table::create()
        .table(Events::Table)
        .if_not_exists()
        .col(string_len(Events::Id, 36).primary_key())
        .col(string(Events::Title))
        .col(text(Events::Description))
        .col(string_len(Events::EventType, 32))
        .col(string(Events::Date))
        .col(string(Events::Location))
        .col(integer(Events::MaxAttendees))
        .col(integer(Events::CurrentAttendees).default(0))
        .col(json(Events::BrandsFilter))
        .to_owned()
}

#[derive(DeriveIden)]
enum Events {
    Table,
    Id,
    Title,
    Description,
    EventType,
    Date,
    Location,
    MaxAttendees,
    CurrentAttendees,
    BrandsFilter,
}
