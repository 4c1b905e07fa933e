//! Learning activity factory for creating test learning activity entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test learning activities with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::learning_activity::LearningActivityFactory;
///
/// let activity = LearningActivityFactory::new(&db)
///     .name("Java Basics")
///     .assessment_id(Some(assessment.id))
///     .build()
///     .await?;
/// ```
pub struct LearningActivityFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::learning_activity::ActiveModel,
}

impl<'a> LearningActivityFactory<'a> {
    /// Creates a new LearningActivityFactory with default values.
    ///
    /// Defaults:
    /// - activity_name: `"Activity {id}"`
    /// - resource_link: `"http://example.com/{id}"`
    /// - activity_level: `"Beginner"`
    /// - score: `1.0`
    /// - creation_date: now
    /// - assessment_id: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let entity = entity::learning_activity::ActiveModel {
            activity_name: ActiveValue::Set(format!("Activity {}", id)),
            resource_link: ActiveValue::Set(format!("http://example.com/{}", id)),
            activity_level: ActiveValue::Set("Beginner".to_string()),
            score: ActiveValue::Set(1.0),
            creation_date: ActiveValue::Set(Utc::now()),
            assessment_id: ActiveValue::Set(None),
            ..Default::default()
        };

        Self { db, entity }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.activity_name = ActiveValue::Set(name.into());
        self
    }

    pub fn level(mut self, level: impl Into<String>) -> Self {
        self.entity.activity_level = ActiveValue::Set(level.into());
        self
    }

    pub fn score(mut self, score: f64) -> Self {
        self.entity.score = ActiveValue::Set(score);
        self
    }

    pub fn assessment_id(mut self, assessment_id: Option<i32>) -> Self {
        self.entity.assessment_id = ActiveValue::Set(assessment_id);
        self
    }

    /// Builds and inserts the learning activity entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::learning_activity::Model)` - Created learning activity entity
    /// - `Err(DbErr)` - Database error during insert (including an unknown assessment id)
    pub async fn build(self) -> Result<entity::learning_activity::Model, DbErr> {
        self.entity.insert(self.db).await
    }
}

/// Creates a learning activity with default values and no assessment.
pub async fn create_learning_activity(
    db: &DatabaseConnection,
) -> Result<entity::learning_activity::Model, DbErr> {
    LearningActivityFactory::new(db).build().await
}

/// Creates a learning activity linked to the provided assessment.
pub async fn create_learning_activity_with_assessment(
    db: &DatabaseConnection,
    assessment_id: i32,
) -> Result<entity::learning_activity::Model, DbErr> {
    LearningActivityFactory::new(db)
        .assessment_id(Some(assessment_id))
        .build()
        .await
}
