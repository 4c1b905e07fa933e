//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a builder struct for customization and a
//! `create_*` convenience function for quick default creation. Factories insert directly
//! through SeaORM active models and return the stored entity model.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let assessment = factory::create_assessment(&db).await?;
//!     let user = factory::register_user::RegisterUserFactory::new(&db)
//!         .first_name("Alex")
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `assessment` - Create assessment entities
//! - `learning_activity` - Create learning activity entities
//! - `register_user` - Create registered user entities
//! - `user_activity` - Create user enrolment entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod assessment;
pub mod helpers;
pub mod learning_activity;
pub mod register_user;
pub mod user_activity;

pub use assessment::create_assessment;
pub use learning_activity::{create_learning_activity, create_learning_activity_with_assessment};
pub use register_user::create_user;
pub use user_activity::create_user_activity;
