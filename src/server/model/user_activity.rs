//! Domain & parameter models for user enrolments in learning activities

use chrono::{DateTime, Utc};
use entity::user_activity::ActivityStatus;

use crate::model::user_activity::{ActivityStatusDto, EnrollUserActivityDto, UserActivityDto};

/// Enrolment of a registered user in a learning activity.
#[derive(Debug, Clone, PartialEq)]
pub struct UserActivity {
    pub id: i32,
    pub user_id: i32,
    pub activity_id: i32,
    pub status: ActivityStatus,
    pub enrolled_at: DateTime<Utc>,
}

impl UserActivity {
    pub fn from_entity(entity: entity::user_activity::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            activity_id: entity.activity_id,
            status: entity.status,
            enrolled_at: entity.enrolled_at,
        }
    }

    pub fn into_dto(self) -> UserActivityDto {
        UserActivityDto {
            id: self.id,
            user_id: self.user_id,
            activity_id: self.activity_id,
            status: match self.status {
                ActivityStatus::Enrolled => ActivityStatusDto::Enrolled,
                ActivityStatus::Completed => ActivityStatusDto::Completed,
            },
            enrolled_at: self.enrolled_at,
        }
    }
}

/// Parameters for enrolling a user in a learning activity
#[derive(Debug, Clone)]
pub struct CreateUserActivityParam {
    pub user_id: i32,
    pub activity_id: i32,
}

impl From<EnrollUserActivityDto> for CreateUserActivityParam {
    fn from(dto: EnrollUserActivityDto) -> Self {
        Self {
            user_id: dto.user_id,
            activity_id: dto.activity_id,
        }
    }
}
