use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "assessment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub assessment_name: String,
    pub assessment_type: String,
    pub assessment_date: DateTimeUtc,
    pub weightage: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::learning_activity::Entity")]
    LearningActivity,
}

impl Related<super::learning_activity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LearningActivity.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
