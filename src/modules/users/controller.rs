use anyhow::anyhow;
use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};
use tracing::instrument;

use schoople_core::AppError;
use schoople_models::ids::UserId;
use schoople_models::users::{UserRolesResponse, UserTokenResponse};

use super::service::UserService;
use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;

fn user_id_param(id: Result<Path<UserId>, PathRejection>) -> Result<UserId, AppError> {
    let Path(id) = id.map_err(|e| AppError::bad_request(anyhow!("Invalid user id: {e}")))?;
    Ok(id)
}

/// Get a user's name and roles
#[utoipa::path(
    get,
    path = "/api/userbyid/{user_id}",
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Username and roles", body = UserRolesResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Neither the user nor an admin", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip(state, auth_user), fields(caller = %auth_user.0.sub))]
pub async fn get_user_by_id(
    State(state): State<AppState>,
    auth_user: AuthUser,
    user_id: Result<Path<UserId>, PathRejection>,
) -> Result<Json<UserRolesResponse>, AppError> {
    let user_id = user_id_param(user_id)?;
    auth_user.ensure_can_view_user(user_id)?;

    Ok(Json(UserService::get_user_roles(&state.store, user_id).await?))
}

/// Re-issue a token for a user along with their role assignments
#[utoipa::path(
    get,
    path = "/api/user/{user_id}",
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Fresh token and role assignments", body = UserTokenResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Neither the user nor an admin", body = ErrorResponse),
        (status = 404, description = "Unknown or inactive user", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip(state, auth_user), fields(caller = %auth_user.0.sub))]
pub async fn get_user_data(
    State(state): State<AppState>,
    auth_user: AuthUser,
    user_id: Result<Path<UserId>, PathRejection>,
) -> Result<Json<UserTokenResponse>, AppError> {
    let user_id = user_id_param(user_id)?;
    auth_user.ensure_can_view_user(user_id)?;

    let response = UserService::get_user_token(
        &state.store,
        user_id,
        &state.jwt_config,
        state.clock.now(),
    )
    .await?;
    Ok(Json(response))
}
