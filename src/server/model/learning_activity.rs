//! Domain & parameter models for learning activity operations
//!
//! A learning activity optionally references an assessment. Create parameters carry the
//! assessment id from the request, which the service resolves before saving.

use chrono::{DateTime, Utc};

use crate::{
    model::learning_activity::{
        CreateLearningActivityDto, LearningActivityDto, UpdateLearningActivityDto,
    },
    server::{error::AppError, model::assessment::Assessment},
};

/// A learning activity with its resolved assessment, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct LearningActivity {
    pub id: i32,
    pub name: String,
    pub resource_link: String,
    pub level: String,
    pub score: f64,
    pub creation_date: DateTime<Utc>,
    pub assessment: Option<Assessment>,
}

impl LearningActivity {
    /// Converts an entity model joined with its optional assessment to the domain model
    pub fn from_entity(
        entity: entity::learning_activity::Model,
        assessment: Option<entity::assessment::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            name: entity.activity_name,
            resource_link: entity.resource_link,
            level: entity.activity_level,
            score: entity.score,
            creation_date: entity.creation_date,
            assessment: assessment.map(Assessment::from_entity),
        }
    }

    /// Converts the learning activity domain model to a DTO for API responses
    pub fn into_dto(self) -> LearningActivityDto {
        LearningActivityDto {
            id: self.id,
            activity_name: self.name,
            resource_link: self.resource_link,
            activity_level: self.level,
            score: self.score,
            creation_date: self.creation_date,
            assessment: self.assessment.map(Assessment::into_dto),
        }
    }
}

/// Parameters for creating a new learning activity
#[derive(Debug, Clone)]
pub struct CreateLearningActivityParam {
    pub name: String,
    pub resource_link: String,
    pub level: String,
    pub score: f64,
    pub creation_date: DateTime<Utc>,
    pub assessment_id: Option<i32>,
}

impl CreateLearningActivityParam {
    /// Converts the create DTO, stamping the current time when no creation date was sent
    pub fn from_dto(dto: CreateLearningActivityDto) -> Self {
        Self {
            name: dto.activity_name,
            resource_link: dto.resource_link,
            level: dto.activity_level,
            score: dto.score,
            creation_date: dto.creation_date.unwrap_or_else(Utc::now),
            assessment_id: dto.assessment_id,
        }
    }
}

/// Parameters for updating an existing learning activity
///
/// `None` for `creation_date` or `assessment_id` keeps the stored value.
/// `Some(None)` for `assessment_id` detaches the assessment.
#[derive(Debug, Clone)]
pub struct UpdateLearningActivityParam {
    pub id: i32,
    pub name: String,
    pub resource_link: String,
    pub level: String,
    pub score: f64,
    pub creation_date: Option<DateTime<Utc>>,
    #[allow(clippy::option_option)]
    pub assessment_id: Option<Option<i32>>,
}

impl UpdateLearningActivityParam {
    /// Converts the update DTO, which must identify the learning activity to update
    ///
    /// # Returns
    /// - `Ok(UpdateLearningActivityParam)` - DTO carried an id
    /// - `Err(AppError::BadRequest)` - DTO carried no id
    pub fn from_dto(dto: UpdateLearningActivityDto) -> Result<Self, AppError> {
        let id = dto.id.ok_or_else(|| {
            AppError::BadRequest("Learning activity id is required for update".to_string())
        })?;
        let assessment_id = dto
            .assessment_id
            .or_else(|| dto.assessment.map(|assessment| assessment.map(|a| a.id)));

        Ok(Self {
            id,
            name: dto.activity_name,
            resource_link: dto.resource_link,
            level: dto.activity_level,
            score: dto.score,
            creation_date: dto.creation_date,
            assessment_id,
        })
    }
}
