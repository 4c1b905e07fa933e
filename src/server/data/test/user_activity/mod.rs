use crate::server::{
    data::user_activity::UserActivityRepository, model::user_activity::CreateUserActivityParam,
};
use entity::user_activity::ActivityStatus;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_user;
