use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::assessment::AssessmentDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningActivityDto {
    pub id: i32,
    pub activity_name: String,
    pub resource_link: String,
    pub activity_level: String,
    pub score: f64,
    pub creation_date: DateTime<Utc>,
    pub assessment: Option<AssessmentDto>,
}

/// Body of `POST /api/learningActivity/`.
///
/// `assessmentId` is resolved to an existing assessment when the activity is saved.
/// A missing `creationDate` defaults to the time of the request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLearningActivityDto {
    pub activity_name: String,
    pub resource_link: String,
    pub activity_level: String,
    pub score: f64,
    #[serde(default)]
    pub creation_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub assessment_id: Option<i32>,
}

/// Body of `PUT /api/learningActivity/`; the activity is identified by `id`.
///
/// Omitting `creationDate` keeps the stored value. The assessment link is taken from
/// `assessmentId`, or from `assessment.id` when only the nested object is sent. Omitting
/// both keeps the link; an explicit `null` detaches the assessment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLearningActivityDto {
    #[serde(default)]
    pub id: Option<i32>,
    pub activity_name: String,
    pub resource_link: String,
    pub activity_level: String,
    pub score: f64,
    #[serde(default)]
    pub creation_date: Option<DateTime<Utc>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[allow(clippy::option_option)] // Out Option = Set/Unset, Inner Option = Some/None
    pub assessment_id: Option<Option<i32>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[allow(clippy::option_option)]
    pub assessment: Option<Option<AssessmentRefDto>>,
}

/// Reference to an assessment nested in a request body; only the id is read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentRefDto {
    pub id: i32,
}
