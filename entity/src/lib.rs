//! SeaORM entity definitions for the learning tracker schema.
//!
//! Tables mirror the migrations in the `migration` crate. Relations carry the same
//! `on_delete` rules as the migrations so schemas generated from entities in tests
//! behave like the migrated database.

pub mod prelude;

pub mod assessment;
pub mod learning_activity;
pub mod register_user;
pub mod user_activity;
