//! Request and response DTOs of the HTTP API.
//!
//! All bodies are JSON with camelCase field names. Request DTOs are converted into server
//! parameter models at the controller boundary and domain models are converted back into
//! response DTOs before serialization.

pub mod api;
pub mod assessment;
pub mod learning_activity;
pub mod user;
pub mod user_activity;
