//! Domain & parameter models for assessment operations

use chrono::{DateTime, Utc};

use crate::{
    model::assessment::{AssessmentDto, CreateAssessmentDto, UpdateAssessmentDto},
    server::error::AppError,
};

/// An assessment that learning activities can be evaluated with.
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    pub id: i32,
    pub name: String,
    pub assessment_type: String,
    pub date: DateTime<Utc>,
    pub weightage: f64,
}

impl Assessment {
    /// Converts an entity model to the assessment domain model
    pub fn from_entity(entity: entity::assessment::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.assessment_name,
            assessment_type: entity.assessment_type,
            date: entity.assessment_date,
            weightage: entity.weightage,
        }
    }

    /// Converts the assessment domain model to a DTO for API responses
    pub fn into_dto(self) -> AssessmentDto {
        AssessmentDto {
            id: self.id,
            assessment_name: self.name,
            assessment_type: self.assessment_type,
            assessment_date: self.date,
            weightage: self.weightage,
        }
    }
}

/// Parameters for creating a new assessment
#[derive(Debug, Clone)]
pub struct CreateAssessmentParam {
    pub name: String,
    pub assessment_type: String,
    pub date: DateTime<Utc>,
    pub weightage: f64,
}

impl From<CreateAssessmentDto> for CreateAssessmentParam {
    fn from(dto: CreateAssessmentDto) -> Self {
        Self {
            name: dto.assessment_name,
            assessment_type: dto.assessment_type,
            date: dto.assessment_date,
            weightage: dto.weightage,
        }
    }
}

/// Parameters for overwriting every mutable field of an existing assessment
#[derive(Debug, Clone)]
pub struct UpdateAssessmentParam {
    pub id: i32,
    pub name: String,
    pub assessment_type: String,
    pub date: DateTime<Utc>,
    pub weightage: f64,
}

impl UpdateAssessmentParam {
    /// Converts the update DTO, which must identify the assessment to update
    ///
    /// # Returns
    /// - `Ok(UpdateAssessmentParam)` - DTO carried an id
    /// - `Err(AppError::BadRequest)` - DTO carried no id
    pub fn from_dto(dto: UpdateAssessmentDto) -> Result<Self, AppError> {
        let id = dto.id.ok_or_else(|| {
            AppError::BadRequest("Assessment id is required for update".to_string())
        })?;

        Ok(Self {
            id,
            name: dto.assessment_name,
            assessment_type: dto.assessment_type,
            date: dto.assessment_date,
            weightage: dto.weightage,
        })
    }
}
