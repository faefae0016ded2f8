//! Create `address` table.
//!
//! Free-text columns; line columns are named `address_line1`/`address_line2`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Address::Table)
                    .if_not_exists()
                    .col(pk_auto(Address::Id))
                    .col(string_len(Address::Country, 255).not_null())
                    .col(string_len(Address::City, 255).not_null())
                    .col(string_len(Address::AddressLine1, 255).not_null())
                    .col(string_len(Address::AddressLine2, 255).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Address::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Address { Table, Id, Country, City, AddressLine1, AddressLine2 }
