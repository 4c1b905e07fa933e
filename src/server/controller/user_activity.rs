use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::user_activity::{EnrollUserActivityDto, UserActivityDto},
    server::{
        error::AppError,
        model::user_activity::{CreateUserActivityParam, UserActivity},
        service::user_activity::UserActivityService,
        state::AppState,
    },
};

/// Enrol a user in a learning activity.
///
/// # Returns
/// - `200 OK` - The new enrolment with status `ENROLLED`
/// - `400 Bad Request` - Unknown user or learning activity, or malformed body
pub async fn enroll(
    State(state): State<AppState>,
    payload: Result<Json<EnrollUserActivityDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let enrolment = UserActivityService::new(&state.db)
        .enroll(CreateUserActivityParam::from(payload))
        .await?;

    Ok((StatusCode::OK, Json(enrolment.into_dto())))
}

pub async fn get_all_enrolments(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let enrolments = UserActivityService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(into_dtos(enrolments))))
}

pub async fn get_enrolments_for_user(
    State(state): State<AppState>,
    user_id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(user_id) = user_id?;

    let enrolments = UserActivityService::new(&state.db)
        .get_by_user(user_id)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(enrolments))))
}

/// Mark an enrolment as completed.
///
/// # Returns
/// - `200 OK` - The enrolment with status `COMPLETED`
/// - `400 Bad Request` - Unknown or non-numeric id
pub async fn complete_enrolment(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;

    let enrolment = UserActivityService::new(&state.db).complete(id).await?;

    Ok((StatusCode::OK, Json(enrolment.into_dto())))
}

pub async fn delete_enrolment(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;

    let deleted = UserActivityService::new(&state.db).delete(id).await?;

    let message = if deleted {
        format!("User activity: {} deleted from database", id)
    } else {
        "Unable to delete user activity from database".to_string()
    };

    Ok((StatusCode::OK, message))
}

fn into_dtos(enrolments: Vec<UserActivity>) -> Vec<UserActivityDto> {
    enrolments.into_iter().map(UserActivity::into_dto).collect()
}
