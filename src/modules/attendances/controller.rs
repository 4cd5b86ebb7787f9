use anyhow::anyhow;
use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};
use tracing::instrument;

use schoople_core::AppError;
use schoople_models::attendances::AttendanceRecord;
use schoople_models::ids::StudentId;

use super::service::AttendanceService;
use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::users::service::UserService;
use crate::state::AppState;

/// List a student's attendance
#[utoipa::path(
    get,
    path = "/api/attendances/{student_id}",
    params(
        ("student_id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Attendance ordered by date", body = [AttendanceRecord]),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Not the owner of this record", body = ErrorResponse),
        (status = 404, description = "Caller's account no longer active", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Attendance"
)]
#[instrument(skip(state, auth_user), fields(user = %auth_user.0.sub))]
pub async fn get_attendances(
    State(state): State<AppState>,
    auth_user: AuthUser,
    student_id: Result<Path<StudentId>, PathRejection>,
) -> Result<Json<Vec<AttendanceRecord>>, AppError> {
    let Path(student_id) =
        student_id.map_err(|e| AppError::bad_request(anyhow!("Invalid student id: {e}")))?;
    let account = UserService::current_account(&state.store, auth_user.user_id()?).await?;
    auth_user.ensure_can_view_student(&account, student_id)?;

    Ok(Json(
        AttendanceService::list_attendance(&state.store, student_id).await?,
    ))
}
