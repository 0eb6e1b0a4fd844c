//! Create `cars` table.
//!
//! `user_id` is an opaque owner reference; no foreign key is declared.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(table()).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Cars::Table).to_owned()).await
    }
}

/// Client-supplied text columns are unbounded; only ids and enum columns carry a length.
fn table() -> TableCreateStatement {
    Table::create()
        .table(Cars::Table)
        .if_not_exists()
        .col(string_len(Cars::Id, 36).primary_key())
        .col(string(Cars::UserId))
        .col(string(Cars::Brand))
        .col(string(Cars::Model))
        .col(integer(Cars::Year))
        .col(integer(Cars::Mileage))
        .col(string(Cars::LastServiceDate))
        .col(string(Cars::Vin))
        .col(string(Cars::Color))
        .to_owned()
}

#[derive(DeriveIden)]
enum Cars { Table, Id, UserId, Brand, Model, Year, Mileage, LastServiceDate, Vin, Color }
