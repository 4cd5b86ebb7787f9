use axum::{Json, extract::State};
use tracing::instrument;
use utoipa::ToSchema;

use schoople_core::AppError;
use schoople_models::auth::{LoginRequest, LoginResponse};

use super::service::AuthService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Body of every error response.
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct ErrorResponse {
    pub error: String,
}

/// Log in with username and password
#[utoipa::path(
    post,
    path = "/api/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 401, description = "Invalid username or password", body = ErrorResponse),
        (status = 404, description = "No student data available for this user", body = ErrorResponse),
        (status = 409, description = "Inconsistent school data", body = ErrorResponse),
        (status = 422, description = "Empty username or password", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn login_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let response = AuthService::login(&state.store, dto, &state.jwt_config, state.clock.now()).await?;
    Ok(Json(response))
}
