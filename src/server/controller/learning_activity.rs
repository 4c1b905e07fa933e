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
    model::learning_activity::{
        CreateLearningActivityDto, LearningActivityDto, UpdateLearningActivityDto,
    },
    server::{
        error::AppError,
        model::learning_activity::{
            CreateLearningActivityParam, LearningActivity, UpdateLearningActivityParam,
        },
        service::learning_activity::LearningActivityService,
        state::AppState,
    },
};

/// Create a learning activity, linking the assessment named by `assessmentId`.
///
/// # Returns
/// - `200 OK` - The created learning activity with its assessment
/// - `400 Bad Request` - Unknown assessment, malformed body or database error
pub async fn add_learning_activity(
    State(state): State<AppState>,
    payload: Result<Json<CreateLearningActivityDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let activity = LearningActivityService::new(&state.db)
        .add_with_assessment(CreateLearningActivityParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(activity.into_dto())))
}

/// List all learning activities with their assessments.
pub async fn get_all_learning_activities(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let activities = LearningActivityService::new(&state.db).get_all().await?;

    let dtos: Vec<LearningActivityDto> = activities
        .into_iter()
        .map(LearningActivity::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a learning activity by id.
pub async fn get_learning_activity(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;

    let activity = LearningActivityService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(activity.into_dto())))
}

/// Update a learning activity identified by the `id` in the body.
///
/// # Returns
/// - `200 OK` - The updated learning activity
/// - `400 Bad Request` - Missing or unknown id, unknown assessment or malformed body
pub async fn update_learning_activity(
    State(state): State<AppState>,
    payload: Result<Json<UpdateLearningActivityDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let param = UpdateLearningActivityParam::from_dto(payload)?;
    let activity = LearningActivityService::new(&state.db)
        .update(param)
        .await?;

    Ok((StatusCode::OK, Json(activity.into_dto())))
}

/// Delete a learning activity together with its enrolments.
///
/// # Returns
/// - `200 OK` - Confirmation text, or soft-failure text when no row was deleted
/// - `400 Bad Request` - Non-numeric id or database error
pub async fn delete_learning_activity(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;

    let deleted = LearningActivityService::new(&state.db).delete(id).await?;

    let message = if deleted {
        format!("Learning activity: {} deleted from database", id)
    } else {
        "Unable to delete learning activity from database".to_string()
    };

    Ok((StatusCode::OK, message))
}
