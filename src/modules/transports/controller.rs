use anyhow::anyhow;
use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};
use tracing::instrument;

use schoople_core::AppError;
use schoople_models::ids::SchoolId;
use schoople_models::transports::TransportSummary;

use super::service::TransportService;
use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;

/// List a school's transport routes
#[utoipa::path(
    get,
    path = "/api/transports/{school_id}",
    params(
        ("school_id" = i32, Path, description = "School ID")
    ),
    responses(
        (status = 200, description = "Routes ordered by route number", body = [TransportSummary]),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Transports"
)]
#[instrument(skip(state, _auth_user))]
pub async fn get_transports(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    school_id: Result<Path<SchoolId>, PathRejection>,
) -> Result<Json<Vec<TransportSummary>>, AppError> {
    let Path(school_id) =
        school_id.map_err(|e| AppError::bad_request(anyhow!("Invalid school id: {e}")))?;

    Ok(Json(
        TransportService::list_transports(&state.store, school_id).await?,
    ))
}
