use sea_orm::{DatabaseConnection, DbErr};

use crate::server::{
    data::assessment::AssessmentRepository,
    error::AppError,
    model::assessment::{Assessment, CreateAssessmentParam, UpdateAssessmentParam},
};

pub struct AssessmentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AssessmentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets an assessment by id, failing with `NotFound` when it doesn't exist
    pub async fn get_by_id(&self, id: i32) -> Result<Assessment, AppError> {
        let repo = AssessmentRepository::new(self.db);

        repo.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Assessment not found with id {}", id)))
    }

    /// Gets all assessments in insertion order
    pub async fn get_all(&self) -> Result<Vec<Assessment>, AppError> {
        let repo = AssessmentRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Adds a new assessment
    /// Returns None if the database reported that no row was inserted
    pub async fn add(&self, param: CreateAssessmentParam) -> Result<Option<Assessment>, AppError> {
        let repo = AssessmentRepository::new(self.db);

        match repo.create(param).await {
            Ok(assessment) => {
                tracing::info!("Added assessment {} ({})", assessment.id, assessment.name);
                Ok(Some(assessment))
            }
            Err(DbErr::RecordNotInserted) => {
                tracing::warn!("Assessment insert returned no row");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Overwrites an existing assessment
    pub async fn update(&self, param: UpdateAssessmentParam) -> Result<Assessment, AppError> {
        let repo = AssessmentRepository::new(self.db);
        let id = param.id;

        repo.update(param)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Assessment not found with id {}", id)))
    }

    /// Deletes an assessment
    /// Returns true if exactly one row was deleted
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = AssessmentRepository::new(self.db);

        let rows = repo.delete(id).await?;
        if rows == 1 {
            tracing::info!("Deleted assessment {}", id);
        }

        Ok(rows == 1)
    }
}
