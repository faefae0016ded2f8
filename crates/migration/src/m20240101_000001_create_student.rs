//! Create `student` table.
//!
//! Auto-increment integer PK; field lengths follow the validator bounds.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Student::Table)
                    .if_not_exists()
                    .col(pk_auto(Student::Id))
                    .col(string_len(Student::FirstName, 50).not_null())
                    .col(string_len(Student::LastName, 50).not_null())
                    .col(date(Student::Birthday).not_null())
                    .col(string_len(Student::Phone, 32).not_null())
                    .col(string_len(Student::Email, 255).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Student::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Student { Table, Id, FirstName, LastName, Birthday, Phone, Email }
