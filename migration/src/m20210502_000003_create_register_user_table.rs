use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RegisterUser::Table)
                    .if_not_exists()
                    .col(pk_auto(RegisterUser::Id))
                    .col(string(RegisterUser::FirstName))
                    .col(string(RegisterUser::LastName))
                    .col(string(RegisterUser::Email))
                    .col(string(RegisterUser::Password))
                    .col(string_len(RegisterUser::Role, 16))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RegisterUser::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RegisterUser {
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    Password,
    Role,
}
