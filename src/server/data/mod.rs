//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! table in the application. Repositories use SeaORM entity models internally and return
//! domain models to keep the data layer separate from the business logic layer.
//!
//! Every repository is generic over `sea_orm::ConnectionTrait`, so the same repository can
//! run against the pooled `DatabaseConnection` or inside a `DatabaseTransaction`.

pub mod assessment;
pub mod learning_activity;
pub mod register_user;
pub mod user_activity;

#[cfg(test)]
mod test;
