//! Learning activity data repository.
//!
//! Activities are always loaded together with their optional assessment through
//! `find_also_related`, so callers receive a fully resolved domain model.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel,
    QueryOrder,
};

use crate::server::model::learning_activity::{
    CreateLearningActivityParam, LearningActivity, UpdateLearningActivityParam,
};

pub struct LearningActivityRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LearningActivityRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new learning activity and returns it with its related assessment
    ///
    /// The referenced assessment, if any, must already exist; callers resolve it first.
    pub async fn create(
        &self,
        param: CreateLearningActivityParam,
    ) -> Result<LearningActivity, DbErr> {
        let activity = entity::learning_activity::ActiveModel {
            activity_name: ActiveValue::Set(param.name),
            resource_link: ActiveValue::Set(param.resource_link),
            activity_level: ActiveValue::Set(param.level),
            score: ActiveValue::Set(param.score),
            creation_date: ActiveValue::Set(param.creation_date),
            assessment_id: ActiveValue::Set(param.assessment_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.find_by_id(activity.id).await?.ok_or(DbErr::RecordNotFound(format!(
            "Learning activity with id {} not found after creation",
            activity.id
        )))
    }

    /// Gets a learning activity by ID with its related assessment
    pub async fn find_by_id(&self, id: i32) -> Result<Option<LearningActivity>, DbErr> {
        let result = entity::prelude::LearningActivity::find_by_id(id)
            .find_also_related(entity::prelude::Assessment)
            .one(self.db)
            .await?;

        Ok(result.map(|(activity, assessment)| LearningActivity::from_entity(activity, assessment)))
    }

    /// Gets all learning activities with their related assessments, ordered by id
    pub async fn get_all(&self) -> Result<Vec<LearningActivity>, DbErr> {
        let results = entity::prelude::LearningActivity::find()
            .find_also_related(entity::prelude::Assessment)
            .order_by_asc(entity::learning_activity::Column::Id)
            .all(self.db)
            .await?;

        Ok(results
            .into_iter()
            .map(|(activity, assessment)| LearningActivity::from_entity(activity, assessment))
            .collect())
    }

    /// Updates a learning activity's fields
    ///
    /// `creation_date` and `assessment_id` are only written when present in `param`;
    /// `assessment_id: Some(None)` clears the link.
    /// Returns `Ok(None)` when no activity has `param.id`.
    pub async fn update(
        &self,
        param: UpdateLearningActivityParam,
    ) -> Result<Option<LearningActivity>, DbErr> {
        let Some(existing) = entity::prelude::LearningActivity::find_by_id(param.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        active.activity_name = ActiveValue::Set(param.name);
        active.resource_link = ActiveValue::Set(param.resource_link);
        active.activity_level = ActiveValue::Set(param.level);
        active.score = ActiveValue::Set(param.score);
        if let Some(creation_date) = param.creation_date {
            active.creation_date = ActiveValue::Set(creation_date);
        }
        if let Some(assessment_id) = param.assessment_id {
            active.assessment_id = ActiveValue::Set(assessment_id);
        }

        let updated = active.update(self.db).await?;

        self.find_by_id(updated.id).await
    }

    /// Deletes a learning activity; enrolments in it are removed by cascade
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::LearningActivity::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
