//! Assessment data repository for database operations.
//!
//! This module provides the `AssessmentRepository` for creating, querying, updating and
//! deleting assessment rows, converting entity models into domain models at the boundary.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel,
    QueryOrder,
};

use crate::server::model::assessment::{Assessment, CreateAssessmentParam, UpdateAssessmentParam};

/// Repository providing database operations for assessments.
pub struct AssessmentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AssessmentRepository<'a, C> {
    /// Creates a new AssessmentRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    ///
    /// # Returns
    /// - `AssessmentRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new assessment.
    ///
    /// # Arguments
    /// - `param` - Assessment fields; the id is assigned by the database
    ///
    /// # Returns
    /// - `Ok(Assessment)` - The stored assessment including its new id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateAssessmentParam) -> Result<Assessment, DbErr> {
        let entity = entity::assessment::ActiveModel {
            assessment_name: ActiveValue::Set(param.name),
            assessment_type: ActiveValue::Set(param.assessment_type),
            assessment_date: ActiveValue::Set(param.date),
            weightage: ActiveValue::Set(param.weightage),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Assessment::from_entity(entity))
    }

    /// Finds an assessment by id.
    ///
    /// # Returns
    /// - `Ok(Some(Assessment))` - Assessment found
    /// - `Ok(None)` - No assessment with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Assessment>, DbErr> {
        let entity = entity::prelude::Assessment::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Assessment::from_entity))
    }

    /// Gets all assessments ordered by id.
    pub async fn get_all(&self) -> Result<Vec<Assessment>, DbErr> {
        let entities = entity::prelude::Assessment::find()
            .order_by_asc(entity::assessment::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Assessment::from_entity).collect())
    }

    /// Overwrites every mutable field of an existing assessment.
    ///
    /// # Returns
    /// - `Ok(Some(Assessment))` - The updated assessment
    /// - `Ok(None)` - No assessment with `param.id`
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update(&self, param: UpdateAssessmentParam) -> Result<Option<Assessment>, DbErr> {
        let Some(existing) = entity::prelude::Assessment::find_by_id(param.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        active.assessment_name = ActiveValue::Set(param.name);
        active.assessment_type = ActiveValue::Set(param.assessment_type);
        active.assessment_date = ActiveValue::Set(param.date);
        active.weightage = ActiveValue::Set(param.weightage);

        let entity = active.update(self.db).await?;

        Ok(Some(Assessment::from_entity(entity)))
    }

    /// Deletes an assessment by id.
    ///
    /// Learning activities referencing the assessment keep existing with their reference
    /// set to null.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted (0 when the id is unknown)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Assessment::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
