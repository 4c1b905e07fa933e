//! Enrolment service.
//!
//! Enrolling checks that both the user and the learning activity exist before the row
//! is inserted, all within one transaction.

use entity::user_activity::ActivityStatus;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        learning_activity::LearningActivityRepository, register_user::RegisterUserRepository,
        user_activity::UserActivityRepository,
    },
    error::AppError,
    model::user_activity::{CreateUserActivityParam, UserActivity},
};

pub struct UserActivityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserActivityService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Enrols a user in a learning activity
    ///
    /// # Returns
    /// - `Ok(UserActivity)` - The new enrolment with status `ENROLLED`
    /// - `Err(AppError::NotFound)` - User or learning activity doesn't exist
    pub async fn enroll(&self, param: CreateUserActivityParam) -> Result<UserActivity, AppError> {
        let txn = self.db.begin().await?;

        if RegisterUserRepository::new(&txn)
            .find_by_id(param.user_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "User not found with id {}",
                param.user_id
            )));
        }

        if LearningActivityRepository::new(&txn)
            .find_by_id(param.activity_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "Learning activity not found with id {}",
                param.activity_id
            )));
        }

        let enrolment = UserActivityRepository::new(&txn).create(param).await?;

        txn.commit().await?;

        tracing::info!(
            "Enrolled user {} in learning activity {}",
            enrolment.user_id,
            enrolment.activity_id
        );

        Ok(enrolment)
    }

    pub async fn get_all(&self) -> Result<Vec<UserActivity>, AppError> {
        let repo = UserActivityRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets the enrolments of one user; an unknown user has none
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<UserActivity>, AppError> {
        let repo = UserActivityRepository::new(self.db);

        Ok(repo.get_by_user(user_id).await?)
    }

    /// Marks an enrolment as completed
    pub async fn complete(&self, id: i32) -> Result<UserActivity, AppError> {
        let repo = UserActivityRepository::new(self.db);

        repo.update_status(id, ActivityStatus::Completed)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User activity not found with id {}", id)))
    }

    /// Deletes an enrolment
    /// Returns true if exactly one row was deleted
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = UserActivityRepository::new(self.db);

        let rows = repo.delete(id).await?;
        if rows == 1 {
            tracing::info!("Deleted user activity {}", id);
        }

        Ok(rows == 1)
    }
}
