use crate::server::{
    data::assessment::AssessmentRepository,
    model::assessment::{CreateAssessmentParam, UpdateAssessmentParam},
};
use chrono::{TimeZone, Utc};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod update;
