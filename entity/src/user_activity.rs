use sea_orm::entity::prelude::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum ActivityStatus {
    #[sea_orm(string_value = "ENROLLED")]
    Enrolled,
    #[sea_orm(string_value = "COMPLETED")]
    Completed,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_activity")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub activity_id: i32,
    pub status: ActivityStatus,
    pub enrolled_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::register_user::Entity",
        from = "Column::UserId",
        to = "super::register_user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    RegisterUser,
    #[sea_orm(
        belongs_to = "super::learning_activity::Entity",
        from = "Column::ActivityId",
        to = "super::learning_activity::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    LearningActivity,
}

impl Related<super::register_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RegisterUser.def()
    }
}

impl Related<super::learning_activity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LearningActivity.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
