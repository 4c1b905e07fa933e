//! Learning activity service.
//!
//! Writes that reference an assessment resolve it and persist the activity inside a
//! single transaction, so an activity is never stored against a missing assessment.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{assessment::AssessmentRepository, learning_activity::LearningActivityRepository},
    error::AppError,
    model::learning_activity::{
        CreateLearningActivityParam, LearningActivity, UpdateLearningActivityParam,
    },
};

pub struct LearningActivityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LearningActivityService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a learning activity, attaching the referenced assessment if any
    ///
    /// # Returns
    /// - `Ok(LearningActivity)` - The stored activity with its resolved assessment
    /// - `Err(AppError::NotFound)` - `assessment_id` names no assessment
    /// - `Err(AppError::DbErr)` - Database error; nothing is persisted
    pub async fn add_with_assessment(
        &self,
        param: CreateLearningActivityParam,
    ) -> Result<LearningActivity, AppError> {
        let txn = self.db.begin().await?;

        if let Some(assessment_id) = param.assessment_id {
            ensure_assessment_exists(&AssessmentRepository::new(&txn), assessment_id).await?;
        }

        let activity = LearningActivityRepository::new(&txn).create(param).await?;

        txn.commit().await?;

        tracing::info!(
            "Added learning activity {} ({})",
            activity.id,
            activity.name
        );

        Ok(activity)
    }

    /// Gets all learning activities with their assessments
    pub async fn get_all(&self) -> Result<Vec<LearningActivity>, AppError> {
        let repo = LearningActivityRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets a learning activity by id
    pub async fn get_by_id(&self, id: i32) -> Result<LearningActivity, AppError> {
        let repo = LearningActivityRepository::new(self.db);

        repo.find_by_id(id).await?.ok_or_else(|| not_found(id))
    }

    /// Updates a learning activity
    ///
    /// A present `assessment_id` is resolved and re-linked, an explicit `Some(None)`
    /// detaches the assessment and an absent one keeps the stored link.
    pub async fn update(
        &self,
        param: UpdateLearningActivityParam,
    ) -> Result<LearningActivity, AppError> {
        let id = param.id;
        let txn = self.db.begin().await?;

        if let Some(Some(assessment_id)) = param.assessment_id {
            ensure_assessment_exists(&AssessmentRepository::new(&txn), assessment_id).await?;
        }

        let activity = LearningActivityRepository::new(&txn)
            .update(param)
            .await?
            .ok_or_else(|| not_found(id))?;

        txn.commit().await?;

        Ok(activity)
    }

    /// Deletes a learning activity
    /// Returns true if exactly one row was deleted
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = LearningActivityRepository::new(self.db);

        let rows = repo.delete(id).await?;
        if rows == 1 {
            tracing::info!("Deleted learning activity {}", id);
        }

        Ok(rows == 1)
    }
}

async fn ensure_assessment_exists<C: sea_orm::ConnectionTrait>(
    repo: &AssessmentRepository<'_, C>,
    assessment_id: i32,
) -> Result<(), AppError> {
    match repo.find_by_id(assessment_id).await? {
        Some(_) => Ok(()),
        None => Err(AppError::NotFound(format!(
            "Assessment not found with id {}",
            assessment_id
        ))),
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Learning activity not found with id {}", id))
}
