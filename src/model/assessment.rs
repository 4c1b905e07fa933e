use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentDto {
    pub id: i32,
    pub assessment_name: String,
    pub assessment_type: String,
    pub assessment_date: DateTime<Utc>,
    pub weightage: f64,
}

/// Body of `POST /api/assessments/`. An `id` sent by the client is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAssessmentDto {
    #[serde(alias = "assesment_name")]
    pub assessment_name: String,
    pub assessment_type: String,
    pub assessment_date: DateTime<Utc>,
    pub weightage: f64,
}

/// Body of `PUT /api/assessments/`; the assessment is identified by `id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAssessmentDto {
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(alias = "assesment_name")]
    pub assessment_name: String,
    pub assessment_type: String,
    pub assessment_date: DateTime<Utc>,
    pub weightage: f64,
}
