//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into HTTP responses. Every failure a caller can cause, whether a
//! missing entity, an invalid request or a failed database operation, is answered with
//! `400 Bad Request` and an `ErrorDto` carrying the message. Only startup and I/O
//! failures produce `500 Internal Server Error`.

pub mod config;

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::config::ConfigError,
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always results in 500 Internal Server Error as configuration issues
    /// prevent normal application operation.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 400 Bad Request carrying the database error message. The error is
    /// logged server-side as well.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Socket or listener failure while serving.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Requested entity does not exist.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),
}

impl AppError {
    /// Short description of the failure category placed in `ErrorDto::details`.
    fn details(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "Requested entity does not exist",
            Self::BadRequest(_) => "Request could not be processed",
            Self::DbErr(_) => "Database operation failed",
            Self::ConfigErr(_) | Self::IoErr(_) => "Internal server error",
        }
    }
}

/// Malformed or mistyped JSON bodies are reported like any other bad request.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Path segments that fail to parse (e.g. a non-numeric id) are bad requests.
impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `NotFound`, `BadRequest` and `DbErr`
/// - 500 Internal Server Error - For configuration and I/O errors
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let details = self.details().to_string();

        match self {
            Self::NotFound(message) | Self::BadRequest(message) => {
                bad_request(message, details).into_response()
            }
            Self::DbErr(err) => {
                tracing::error!("Database error: {}", err);
                bad_request(err.to_string(), details).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

fn bad_request(message: String, details: String) -> (StatusCode, Json<ErrorDto>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorDto {
            timestamp: Utc::now(),
            message,
            details,
        }),
    )
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client to avoid leaking
/// implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                timestamp: Utc::now(),
                message: "Internal server error".to_string(),
                details: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
