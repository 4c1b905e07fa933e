//! User activity factory for enrolling test users in learning activities.

use chrono::Utc;
use entity::user_activity::ActivityStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an enrolment of the user in the learning activity with `Enrolled` status.
///
/// Both referenced rows must already exist.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - ID of the registered user
/// - `activity_id` - ID of the learning activity
///
/// # Returns
/// - `Ok(entity::user_activity::Model)` - Created user activity entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_user_activity(
    db: &DatabaseConnection,
    user_id: i32,
    activity_id: i32,
) -> Result<entity::user_activity::Model, DbErr> {
    entity::user_activity::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        activity_id: ActiveValue::Set(activity_id),
        status: ActiveValue::Set(ActivityStatus::Enrolled),
        enrolled_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
