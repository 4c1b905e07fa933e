use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "learning_activity")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub activity_name: String,
    pub resource_link: String,
    pub activity_level: String,
    pub score: f64,
    pub creation_date: DateTimeUtc,
    pub assessment_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::assessment::Entity",
        from = "Column::AssessmentId",
        to = "super::assessment::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Assessment,
    #[sea_orm(has_many = "super::user_activity::Entity")]
    UserActivity,
}

impl Related<super::assessment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assessment.def()
    }
}

impl Related<super::user_activity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserActivity.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
