use anyhow::anyhow;
use chrono::{DateTime, Utc};
use tracing::instrument;

use schoople_config::JwtConfig;
use schoople_core::AppError;
use schoople_db::Store;
use schoople_models::ids::UserId;
use schoople_models::users::{
    RoleAssignment, RoleSummary, User, UserRolesResponse, UserTokenResponse,
};

use crate::modules::auth::service::AuthService;

pub struct UserService;

impl UserService {
    /// The account behind a token must still exist.
    #[instrument(skip(store))]
    pub async fn ensure_user_exists(store: &Store, id: UserId) -> Result<User, AppError> {
        store
            .find_user(id)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow!("User not found")))
    }

    /// The caller's account as it stands now. Deactivated accounts count as missing.
    #[instrument(skip(store))]
    pub async fn current_account(store: &Store, id: UserId) -> Result<User, AppError> {
        store
            .find_user(id)
            .await?
            .filter(|user| user.is_active)
            .ok_or_else(|| AppError::not_found(anyhow!("User not found")))
    }

    #[instrument(skip(store))]
    pub async fn get_user_roles(store: &Store, id: UserId) -> Result<UserRolesResponse, AppError> {
        let user = Self::ensure_user_exists(store, id).await?;
        let roles = store
            .roles_for_user(user.id)
            .await?
            .into_iter()
            .map(RoleSummary::from)
            .collect();

        Ok(UserRolesResponse {
            username: user.username,
            roles,
        })
    }

    /// Fresh token for an active user, with every role assignment the user holds.
    #[instrument(skip(store, jwt_config))]
    pub async fn get_user_token(
        store: &Store,
        id: UserId,
        jwt_config: &JwtConfig,
        now: DateTime<Utc>,
    ) -> Result<UserTokenResponse, AppError> {
        let user = store
            .find_user(id)
            .await?
            .filter(|user| user.is_active)
            .ok_or_else(|| AppError::not_found(anyhow!("No user details available for this user.")))?;

        let user_data = store
            .role_assignments(user.id)
            .await?
            .into_iter()
            .map(RoleAssignment::from)
            .collect();

        let (token, _) = AuthService::issue_token(store, &user, jwt_config, now).await?;

        Ok(UserTokenResponse { token, user_data })
    }
}
