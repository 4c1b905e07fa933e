//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Existence checks**: Turning absent rows into `AppError::NotFound`
//! - **Orchestration**: Resolving related rows before a write
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Running multi-step writes atomically

pub mod assessment;
pub mod learning_activity;
pub mod user;
pub mod user_activity;
