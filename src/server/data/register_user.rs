//! Registered user data repository for database operations.
//!
//! This module provides the `RegisterUserRepository` for managing registered users.
//! Partial updates (first name, password) only write the targeted column.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel,
    QueryOrder,
};

use crate::server::model::user::{CreateRegisterUserParam, RegisterUser};

/// Repository providing database operations for registered users.
pub struct RegisterUserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RegisterUserRepository<'a, C> {
    /// Creates a new RegisterUserRepository instance.
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new registered user.
    ///
    /// # Arguments
    /// - `param` - Names, email, password and role of the new user
    ///
    /// # Returns
    /// - `Ok(RegisterUser)` - The stored user including its new id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateRegisterUserParam) -> Result<RegisterUser, DbErr> {
        let entity = entity::register_user::ActiveModel {
            first_name: ActiveValue::Set(param.first_name),
            last_name: ActiveValue::Set(param.last_name),
            email: ActiveValue::Set(param.email),
            password: ActiveValue::Set(param.password),
            role: ActiveValue::Set(param.role),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(RegisterUser::from_entity(entity))
    }

    /// Finds a registered user by id.
    ///
    /// # Returns
    /// - `Ok(Some(RegisterUser))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<RegisterUser>, DbErr> {
        let entity = entity::prelude::RegisterUser::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(RegisterUser::from_entity))
    }

    /// Gets all registered users ordered by id.
    pub async fn get_all(&self) -> Result<Vec<RegisterUser>, DbErr> {
        let entities = entity::prelude::RegisterUser::find()
            .order_by_asc(entity::register_user::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(RegisterUser::from_entity).collect())
    }

    /// Replaces a user's first name, leaving every other column untouched.
    ///
    /// # Returns
    /// - `Ok(Some(RegisterUser))` - The updated user
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update_first_name(
        &self,
        id: i32,
        first_name: String,
    ) -> Result<Option<RegisterUser>, DbErr> {
        let Some(existing) = entity::prelude::RegisterUser::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        active.first_name = ActiveValue::Set(first_name);

        let entity = active.update(self.db).await?;

        Ok(Some(RegisterUser::from_entity(entity)))
    }

    /// Replaces a user's password, leaving every other column untouched.
    ///
    /// # Returns
    /// - `Ok(Some(RegisterUser))` - The updated user
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update_password(
        &self,
        id: i32,
        password: String,
    ) -> Result<Option<RegisterUser>, DbErr> {
        let Some(existing) = entity::prelude::RegisterUser::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        active.password = ActiveValue::Set(password);

        let entity = active.update(self.db).await?;

        Ok(Some(RegisterUser::from_entity(entity)))
    }

    /// Deletes a registered user by id; their enrolments are removed by cascade.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted (0 when the id is unknown)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::RegisterUser::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
