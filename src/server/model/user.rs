//! Registered user domain models and parameters.
//!
//! Passwords are stored and compared as plain values.

use entity::register_user::Role;

use crate::model::user::{CreateRegisterUserDto, RegisterUserDto, RoleDto};

/// A user registered with the tracker.
#[derive(Debug, Clone, PartialEq)]
pub struct RegisterUser {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl RegisterUser {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::register_user::Model) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            password: entity.password,
            role: entity.role,
        }
    }

    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> RegisterUserDto {
        RegisterUserDto {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            password: self.password,
            role: role_into_dto(self.role),
        }
    }

    /// Whether both names equal the stored ones exactly (case-sensitive).
    pub fn names_match(&self, first_name: &str, last_name: &str) -> bool {
        self.first_name == first_name && self.last_name == last_name
    }
}

fn role_into_dto(role: Role) -> RoleDto {
    match role {
        Role::User => RoleDto::User,
        Role::Admin => RoleDto::Admin,
    }
}

fn role_from_dto(role: RoleDto) -> Role {
    match role {
        RoleDto::User => Role::User,
        RoleDto::Admin => Role::Admin,
    }
}

/// Parameters for registering a new user.
#[derive(Debug, Clone)]
pub struct CreateRegisterUserParam {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl From<CreateRegisterUserDto> for CreateRegisterUserParam {
    fn from(dto: CreateRegisterUserDto) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email,
            password: dto.password,
            role: role_from_dto(dto.role),
        }
    }
}

/// Parameters for a password change guarded by the user's names.
///
/// The password is only replaced when `first_name` and `last_name` match the stored user.
#[derive(Debug, Clone)]
pub struct UpdatePasswordParam {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
}
