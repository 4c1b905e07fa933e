use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ActivityStatusDto {
    Enrolled,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserActivityDto {
    pub id: i32,
    pub user_id: i32,
    pub activity_id: i32,
    pub status: ActivityStatusDto,
    pub enrolled_at: DateTime<Utc>,
}

/// Body of `POST /api/userActivity/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollUserActivityDto {
    pub user_id: i32,
    pub activity_id: i32,
}
