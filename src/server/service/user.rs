use sea_orm::DatabaseConnection;

use crate::server::{
    data::register_user::RegisterUserRepository,
    error::AppError,
    model::user::{CreateRegisterUserParam, RegisterUser, UpdatePasswordParam},
};

pub struct RegisterUserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RegisterUserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new user
    pub async fn create(&self, param: CreateRegisterUserParam) -> Result<RegisterUser, AppError> {
        let repo = RegisterUserRepository::new(self.db);

        let user = repo.create(param).await?;
        tracing::info!("Registered user {} ({})", user.id, user.email);

        Ok(user)
    }

    /// Lists every registered user in insertion order
    pub async fn list(&self) -> Result<Vec<RegisterUser>, AppError> {
        let repo = RegisterUserRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets a registered user by id
    pub async fn get_by_id(&self, id: i32) -> Result<RegisterUser, AppError> {
        let repo = RegisterUserRepository::new(self.db);

        repo.find_by_id(id).await?.ok_or_else(|| not_found(id))
    }

    /// Replaces a user's first name
    pub async fn update_first_name(
        &self,
        id: i32,
        first_name: String,
    ) -> Result<RegisterUser, AppError> {
        let repo = RegisterUserRepository::new(self.db);

        repo.update_first_name(id, first_name)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Replaces a user's password when both names match the stored user
    ///
    /// A name mismatch leaves the user untouched and still succeeds, returning the stored
    /// user.
    pub async fn update_password(&self, param: UpdatePasswordParam) -> Result<RegisterUser, AppError> {
        let repo = RegisterUserRepository::new(self.db);

        let user = repo
            .find_by_id(param.id)
            .await?
            .ok_or_else(|| not_found(param.id))?;

        if !user.names_match(&param.first_name, &param.last_name) {
            tracing::debug!(
                "Password of user {} not changed: names do not match",
                param.id
            );
            return Ok(user);
        }

        repo.update_password(param.id, param.password)
            .await?
            .ok_or_else(|| not_found(param.id))
    }

    /// Deletes a registered user and their enrolments
    /// Returns true if exactly one row was deleted
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = RegisterUserRepository::new(self.db);

        let rows = repo.delete(id).await?;
        if rows == 1 {
            tracing::info!("Deleted user {}", id);
        }

        Ok(rows == 1)
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("User not found with id {}", id))
}
