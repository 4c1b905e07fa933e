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
    model::user::{CreateRegisterUserDto, RegisterUserDto},
    server::{
        error::AppError,
        model::user::{CreateRegisterUserParam, RegisterUser, UpdatePasswordParam},
        service::user::RegisterUserService,
        state::AppState,
    },
};

/// Register a new user.
///
/// `role` defaults to `USER` when omitted from the body.
///
/// # Returns
/// - `200 OK` - The registered user
/// - `400 Bad Request` - Malformed body or database error
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateRegisterUserDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let user = RegisterUserService::new(&state.db)
        .create(CreateRegisterUserParam::from(payload))
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// List all registered users.
pub async fn list_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let users = RegisterUserService::new(&state.db).list().await?;

    let dtos: Vec<RegisterUserDto> = users.into_iter().map(RegisterUser::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a registered user by id.
pub async fn get_user(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;

    let user = RegisterUserService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Rename a user.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `path` - User id and the new first name
///
/// # Returns
/// - `200 OK` - The user with only the first name changed
/// - `400 Bad Request` - Unknown or non-numeric id
pub async fn update_first_name(
    State(state): State<AppState>,
    path: Result<Path<(i32, String)>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path((id, first_name)) = path?;

    let user = RegisterUserService::new(&state.db)
        .update_first_name(id, first_name)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Change a user's password.
///
/// The password is only replaced when the first and last name in the path both match
/// the stored user exactly. On a mismatch the stored user is returned unchanged.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `path` - User id, first name, last name and new password
///
/// # Returns
/// - `200 OK` - The stored user after the (possibly skipped) change
/// - `400 Bad Request` - Unknown or non-numeric id
pub async fn update_password(
    State(state): State<AppState>,
    path: Result<Path<(i32, String, String, String)>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path((id, first_name, last_name, password)) = path?;

    let user = RegisterUserService::new(&state.db)
        .update_password(UpdatePasswordParam {
            id,
            first_name,
            last_name,
            password,
        })
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Delete a user together with their enrolments.
///
/// # Returns
/// - `200 OK` - Confirmation text, or soft-failure text when no row was deleted
/// - `400 Bad Request` - Non-numeric id or database error
pub async fn delete_user(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;

    let deleted = RegisterUserService::new(&state.db).delete(id).await?;

    let message = if deleted {
        format!("User: {} deleted from database", id)
    } else {
        "Unable to delete user from database".to_string()
    };

    Ok((StatusCode::OK, message))
}
