use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20210501_000002_create_learning_activity_table::LearningActivity,
    m20210502_000003_create_register_user_table::RegisterUser,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserActivity::Table)
                    .if_not_exists()
                    .col(pk_auto(UserActivity::Id))
                    .col(integer(UserActivity::UserId))
                    .col(integer(UserActivity::ActivityId))
                    .col(string_len(UserActivity::Status, 16))
                    .col(timestamp_with_time_zone(UserActivity::EnrolledAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_activity_user_id")
                            .from(UserActivity::Table, UserActivity::UserId)
                            .to(RegisterUser::Table, RegisterUser::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_activity_activity_id")
                            .from(UserActivity::Table, UserActivity::ActivityId)
                            .to(LearningActivity::Table, LearningActivity::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserActivity::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserActivity {
    Table,
    Id,
    UserId,
    ActivityId,
    Status,
    EnrolledAt,
}
