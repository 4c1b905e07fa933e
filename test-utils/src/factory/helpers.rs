//! Shared helper utilities for factory methods.
//!
//! Provides unique ID generation for default field values and a convenience method for
//! creating an enrolment together with everything it depends on.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user enrolled in a learning activity which is linked to an assessment.
///
/// This is a convenience method that creates:
/// 1. Assessment
/// 2. Learning activity referencing the assessment
/// 3. Registered user
/// 4. User activity enrolling the user in the learning activity
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((assessment, activity, user, user_activity))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_enrollment_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::assessment::Model,
        entity::learning_activity::Model,
        entity::register_user::Model,
        entity::user_activity::Model,
    ),
    DbErr,
> {
    let assessment = crate::factory::assessment::create_assessment(db).await?;
    let activity =
        crate::factory::learning_activity::create_learning_activity_with_assessment(
            db,
            assessment.id,
        )
        .await?;
    let user = crate::factory::register_user::create_user(db).await?;
    let user_activity =
        crate::factory::user_activity::create_user_activity(db, user.id, activity.id).await?;

    Ok((assessment, activity, user, user_activity))
}
