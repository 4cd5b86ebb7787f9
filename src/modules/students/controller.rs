use anyhow::anyhow;
use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};
use tracing::instrument;

use schoople_core::AppError;
use schoople_models::ids::StudentId;
use schoople_models::students::StudentDataResponse;

use super::service::StudentService;
use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::users::service::UserService;
use crate::state::AppState;

/// Get a student's profile
#[utoipa::path(
    get,
    path = "/api/student-data/{id}",
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Student profile", body = StudentDataResponse),
        (status = 400, description = "Invalid student id", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Not the owner of this record", body = ErrorResponse),
        (status = 404, description = "User or student not found", body = ErrorResponse),
        (status = 409, description = "Inconsistent school data", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Students"
)]
#[instrument(skip(state, auth_user), fields(user = %auth_user.0.sub))]
pub async fn get_student_data(
    State(state): State<AppState>,
    auth_user: AuthUser,
    id: Result<Path<StudentId>, PathRejection>,
) -> Result<Json<StudentDataResponse>, AppError> {
    let Path(id) = id.map_err(|e| AppError::bad_request(anyhow!("Invalid student id: {e}")))?;

    let account = UserService::current_account(&state.store, auth_user.user_id()?).await?;
    auth_user.ensure_can_view_student(&account, id)?;

    let student_data = StudentService::get_student_profile(&state.store, id).await?;
    Ok(Json(StudentDataResponse { student_data }))
}
