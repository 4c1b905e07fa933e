use sea_orm_migration::{prelude::*, schema::*};

use super::m20210501_000001_create_assessment_table::Assessment;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LearningActivity::Table)
                    .if_not_exists()
                    .col(pk_auto(LearningActivity::Id))
                    .col(string(LearningActivity::ActivityName))
                    .col(string(LearningActivity::ResourceLink))
                    .col(string(LearningActivity::ActivityLevel))
                    .col(double(LearningActivity::Score))
                    .col(timestamp_with_time_zone(LearningActivity::CreationDate))
                    .col(integer_null(LearningActivity::AssessmentId))
                    // Deleting an assessment detaches it from its activities
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_learning_activity_assessment_id")
                            .from(LearningActivity::Table, LearningActivity::AssessmentId)
                            .to(Assessment::Table, Assessment::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LearningActivity::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum LearningActivity {
    Table,
    Id,
    ActivityName,
    ResourceLink,
    ActivityLevel,
    Score,
    CreationDate,
    AssessmentId,
}
