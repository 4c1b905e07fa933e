use axum::{
    routing::{delete, get, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::server::{
    controller::{
        assessment::{
            add_assessment, delete_assessment, get_all_assessments, get_assessment,
            update_assessment,
        },
        learning_activity::{
            add_learning_activity, delete_learning_activity, get_all_learning_activities,
            get_learning_activity, update_learning_activity,
        },
        user::{create_user, delete_user, get_user, list_users, update_first_name, update_password},
        user_activity::{
            complete_enrolment, delete_enrolment, enroll, get_all_enrolments,
            get_enrolments_for_user,
        },
    },
    state::AppState,
};

/// Builds the API router with every route, CORS and request tracing attached.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/assessments/",
            get(get_all_assessments)
                .post(add_assessment)
                .put(update_assessment),
        )
        .route(
            "/api/assessments/{id}",
            get(get_assessment).delete(delete_assessment),
        )
        .route(
            "/api/learningActivity/",
            get(get_all_learning_activities)
                .post(add_learning_activity)
                .put(update_learning_activity),
        )
        .route(
            "/api/learningActivity/{id}",
            get(get_learning_activity).delete(delete_learning_activity),
        )
        .route("/api/users/", get(list_users).post(create_user))
        .route("/api/users/{id}", get(get_user).delete(delete_user))
        .route("/api/users/{id}/{first_name}/", put(update_first_name))
        .route(
            "/api/users/{id}/{first_name}/{last_name}/{password}/",
            put(update_password),
        )
        .route("/api/userActivity/", get(get_all_enrolments).post(enroll))
        .route("/api/userActivity/user/{user_id}", get(get_enrolments_for_user))
        .route("/api/userActivity/{id}", delete(delete_enrolment))
        .route("/api/userActivity/{id}/complete/", put(complete_enrolment))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
