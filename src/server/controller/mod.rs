//! HTTP request handlers.
//!
//! Controllers translate path segments and JSON bodies into service parameters, call the
//! matching service and convert the resulting domain models into DTOs. Extractor
//! rejections are converted into `AppError::BadRequest` so malformed requests share the
//! same error body as domain failures.

pub mod assessment;
pub mod learning_activity;
pub mod user;
pub mod user_activity;

#[cfg(test)]
mod test;
