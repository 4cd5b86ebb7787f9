use anyhow::anyhow;
use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};
use tracing::instrument;

use schoople_core::AppError;
use schoople_models::events::EventSummary;
use schoople_models::ids::SchoolId;

use super::service::EventService;
use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;

/// List a school's calendar events
#[utoipa::path(
    get,
    path = "/api/events/{school_id}",
    params(
        ("school_id" = i32, Path, description = "School ID")
    ),
    responses(
        (status = 200, description = "Events, newest first", body = [EventSummary]),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Events"
)]
#[instrument(skip(state, _auth_user))]
pub async fn get_events(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    school_id: Result<Path<SchoolId>, PathRejection>,
) -> Result<Json<Vec<EventSummary>>, AppError> {
    let Path(school_id) =
        school_id.map_err(|e| AppError::bad_request(anyhow!("Invalid school id: {e}")))?;

    let events = EventService::list_events(&state.store, school_id, state.clock.now()).await?;
    Ok(Json(events))
}
