//! Registered user factory for creating test user entities.

use crate::factory::helpers::next_id;
use entity::register_user::Role;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::register_user::RegisterUserFactory;
///
/// let user = RegisterUserFactory::new(&db)
///     .first_name("Alex")
///     .last_name("Vele")
///     .password("1as235@fsq")
///     .build()
///     .await?;
/// ```
pub struct RegisterUserFactory<'a> {
    db: &'a DatabaseConnection,
    first_name: String,
    last_name: String,
    email: String,
    password: String,
    role: Role,
}

impl<'a> RegisterUserFactory<'a> {
    /// Creates a new RegisterUserFactory with default values.
    ///
    /// Defaults:
    /// - first_name: `"First{id}"`
    /// - last_name: `"Last{id}"`
    /// - email: `"user{id}@example.com"`
    /// - password: `"password{id}"`
    /// - role: `Role::User`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            first_name: format!("First{}", id),
            last_name: format!("Last{}", id),
            email: format!("user{}@example.com", id),
            password: format!("password{}", id),
            role: Role::User,
        }
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    pub fn role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::register_user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::register_user::Model, DbErr> {
        entity::register_user::ActiveModel {
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            email: ActiveValue::Set(self.email),
            password: ActiveValue::Set(self.password),
            role: ActiveValue::Set(self.role),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `RegisterUserFactory::new(db).build().await`.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::register_user::Model, DbErr> {
    RegisterUserFactory::new(db).build().await
}
