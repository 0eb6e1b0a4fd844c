//! Create `users` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(table()).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Users::Table).to_owned()).await
    }
}

fn table() -> TableCreateStatement {
    Table::create()
        .table(Users::Table)
        .if_not_exists()
        .col(string_len(Users::Id, 36).primary_key())
        .col(string(Users::Name))
        .col(string(Users::Email))
        .col(string(Users::Phone))
        .col(string_len(Users::MembershipTier, 32))
        .col(timestamp_with_time_zone(Users::CreatedAt))
        .to_owned()
}

#[derive(DeriveIden)]
enum Users { Table, Id, Name, Email, Phone, MembershipTier, CreatedAt }
