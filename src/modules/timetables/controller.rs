use anyhow::anyhow;
use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use tracing::instrument;

use schoople_core::AppError;
use schoople_models::timetables::{TimetableEntry, TimetableQuery};

use super::service::TimetableService;
use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;

/// Get the timetable of a grade-section
#[utoipa::path(
    get,
    path = "/api/timetable-details",
    params(TimetableQuery),
    responses(
        (status = 200, description = "Timetable entries ordered by period", body = [TimetableEntry]),
        (status = 400, description = "Missing or non-integer query parameters", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Timetables"
)]
#[instrument(skip(state, _auth_user))]
pub async fn get_timetable_details(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    query: Result<Query<TimetableQuery>, QueryRejection>,
) -> Result<Json<Vec<TimetableEntry>>, AppError> {
    let Query(query) = query
        .map_err(|e| AppError::bad_request(anyhow!("Invalid query parameters: {}", e)))?;
    let (school_id, academic_year_id, grade_section_id) = query
        .keys()
        .ok_or_else(|| AppError::bad_request(anyhow!("Missing required query parameters")))?;

    let entries =
        TimetableService::get_timetable(&state.store, school_id, academic_year_id, grade_section_id)
            .await?;
    Ok(Json(entries))
}
