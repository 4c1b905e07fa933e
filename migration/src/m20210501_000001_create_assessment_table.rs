use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Assessment::Table)
                    .if_not_exists()
                    .col(pk_auto(Assessment::Id))
                    .col(string(Assessment::AssessmentName))
                    .col(string(Assessment::AssessmentType))
                    .col(timestamp_with_time_zone(Assessment::AssessmentDate))
                    .col(double(Assessment::Weightage))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Assessment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Assessment {
    Table,
    Id,
    AssessmentName,
    AssessmentType,
    AssessmentDate,
    Weightage,
}
