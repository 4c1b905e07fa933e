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
    model::assessment::{AssessmentDto, CreateAssessmentDto, UpdateAssessmentDto},
    server::{
        error::AppError,
        model::assessment::{Assessment, CreateAssessmentParam, UpdateAssessmentParam},
        service::assessment::AssessmentService,
        state::AppState,
    },
};

/// Get an assessment by id.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Assessment id from the path
///
/// # Returns
/// - `200 OK` - The assessment
/// - `400 Bad Request` - Unknown id or non-numeric path segment
pub async fn get_assessment(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;

    let assessment = AssessmentService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(assessment.into_dto())))
}

/// List all assessments.
///
/// # Returns
/// - `200 OK` - Every assessment in insertion order
/// - `400 Bad Request` - Database error
pub async fn get_all_assessments(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let assessments = AssessmentService::new(&state.db).get_all().await?;

    let dtos: Vec<AssessmentDto> = assessments.into_iter().map(Assessment::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Add a new assessment.
///
/// Responds with a plain-text confirmation naming the assessment, or with a plain-text
/// notice when the database stored nothing. Both are `200 OK`.
///
/// # Returns
/// - `200 OK` - Confirmation or soft-failure text
/// - `400 Bad Request` - Malformed body or database error
pub async fn add_assessment(
    State(state): State<AppState>,
    payload: Result<Json<CreateAssessmentDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let added = AssessmentService::new(&state.db)
        .add(CreateAssessmentParam::from(payload))
        .await?;

    let message = match added {
        Some(assessment) => format!("assessment:{} added to database", assessment.name),
        None => "Unable to add assessment to database".to_string(),
    };

    Ok((StatusCode::OK, message))
}

/// Update an existing assessment.
///
/// The assessment is identified by the `id` carried in the body.
///
/// # Returns
/// - `200 OK` - The updated assessment
/// - `400 Bad Request` - Missing or unknown id, malformed body or database error
pub async fn update_assessment(
    State(state): State<AppState>,
    payload: Result<Json<UpdateAssessmentDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let param = UpdateAssessmentParam::from_dto(payload)?;
    let assessment = AssessmentService::new(&state.db).update(param).await?;

    Ok((StatusCode::OK, Json(assessment.into_dto())))
}

/// Delete an assessment.
///
/// Learning activities that referenced the assessment remain with no assessment.
///
/// # Returns
/// - `200 OK` - Confirmation text, or soft-failure text when no row was deleted
/// - `400 Bad Request` - Non-numeric id or database error
pub async fn delete_assessment(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;

    let deleted = AssessmentService::new(&state.db).delete(id).await?;

    let message = if deleted {
        format!("Assessment: {} deleted from database", id)
    } else {
        "Unable to delete Assessment from database".to_string()
    };

    Ok((StatusCode::OK, message))
}
