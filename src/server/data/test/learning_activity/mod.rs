use crate::server::{
    data::learning_activity::LearningActivityRepository,
    model::learning_activity::{CreateLearningActivityParam, UpdateLearningActivityParam},
};
use chrono::{TimeZone, Utc};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod find_by_id;
mod update;

fn create_param(assessment_id: Option<i32>) -> CreateLearningActivityParam {
    CreateLearningActivityParam {
        name: "Ownership".to_string(),
        resource_link: "https://doc.rust-lang.org/book/ch04-00.html".to_string(),
        level: "Beginner".to_string(),
        score: 10.0,
        creation_date: Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap(),
        assessment_id,
    }
}
