use crate::server::{data::register_user::RegisterUserRepository, model::user::CreateRegisterUserParam};
use entity::register_user::Role;
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod update_password;

fn alex() -> CreateRegisterUserParam {
    CreateRegisterUserParam {
        first_name: "Alex".to_string(),
        last_name: "Vele".to_string(),
        email: "alex@gmail.com".to_string(),
        password: "12345@fsq".to_string(),
        role: Role::User,
    }
}
