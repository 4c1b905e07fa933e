//! Assessment factory for creating test assessment entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test assessments with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::assessment::AssessmentFactory;
///
/// let assessment = AssessmentFactory::new(&db)
///     .name("Java")
///     .assessment_type("MCQ")
///     .weightage(2.0)
///     .build()
///     .await?;
/// ```
pub struct AssessmentFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    assessment_type: String,
    date: DateTime<Utc>,
    weightage: f64,
}

impl<'a> AssessmentFactory<'a> {
    /// Creates a new AssessmentFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Assessment {id}"` where id is auto-incremented
    /// - assessment_type: `"MCQ"`
    /// - date: now
    /// - weightage: `1.0`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Assessment {}", id),
            assessment_type: "MCQ".to_string(),
            date: Utc::now(),
            weightage: 1.0,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn assessment_type(mut self, assessment_type: impl Into<String>) -> Self {
        self.assessment_type = assessment_type.into();
        self
    }

    pub fn date(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }

    pub fn weightage(mut self, weightage: f64) -> Self {
        self.weightage = weightage;
        self
    }

    /// Builds and inserts the assessment entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::assessment::Model)` - Created assessment entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::assessment::Model, DbErr> {
        entity::assessment::ActiveModel {
            assessment_name: ActiveValue::Set(self.name),
            assessment_type: ActiveValue::Set(self.assessment_type),
            assessment_date: ActiveValue::Set(self.date),
            weightage: ActiveValue::Set(self.weightage),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an assessment with default values.
///
/// Shorthand for `AssessmentFactory::new(db).build().await`.
pub async fn create_assessment(
    db: &DatabaseConnection,
) -> Result<entity::assessment::Model, DbErr> {
    AssessmentFactory::new(db).build().await
}
