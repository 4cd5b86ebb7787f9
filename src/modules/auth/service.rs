use anyhow::anyhow;
use chrono::{DateTime, Utc};
use tracing::instrument;

use schoople_auth::create_access_token;
use schoople_config::JwtConfig;
use schoople_core::{AppError, verify_password_or_dummy};
use schoople_db::Store;
use schoople_models::auth::{LoginRequest, LoginResponse};
use schoople_models::users::User;
use schoople_observability::{track_jwt_issued, track_login_failure, track_login_success};

use crate::modules::students::service::StudentService;

const INVALID_CREDENTIALS: &str = "Invalid username or password";

pub struct AuthService;

impl AuthService {
    /// Verifies credentials and returns a token plus the caller's student profile.
    ///
    /// Unknown user, inactive user and wrong password are indistinguishable to the
    /// caller. A bcrypt comparison runs in every case.
    #[instrument(skip(store, dto, jwt_config), fields(username = %dto.username))]
    pub async fn login(
        store: &Store,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
        now: DateTime<Utc>,
    ) -> Result<LoginResponse, AppError> {
        let user = store.find_login_user(&dto.username).await?;
        let password_ok =
            verify_password_or_dummy(&dto.password, user.as_ref().map(|u| u.password.as_str()));

        let user = match user {
            Some(user) if password_ok => user,
            _ => {
                track_login_failure("invalid_credentials");
                return Err(AppError::invalid_credentials(INVALID_CREDENTIALS));
            }
        };

        let student_data = match user.student_id {
            Some(student_id) => Some(
                StudentService::build_profile(store, student_id)
                    .await?
                    .ok_or_else(|| {
                        track_login_failure("missing_student");
                        AppError::not_found(anyhow!("No student data available for this user."))
                    })?,
            ),
            None => None,
        };

        let (token, role) = Self::issue_token(store, &user, jwt_config, now).await?;
        track_login_success(&role);
        tracing::info!(user_id = %user.id, "login succeeded");

        Ok(LoginResponse {
            token,
            student_data,
        })
    }

    /// Signs a fresh access token for `user`. Also returns the primary role type
    /// for metrics ("none" when the user has no role).
    pub async fn issue_token(
        store: &Store,
        user: &User,
        jwt_config: &JwtConfig,
        now: DateTime<Utc>,
    ) -> Result<(String, String), AppError> {
        let roles = store.roles_for_user(user.id).await?;
        let token = create_access_token(user, &roles, jwt_config, now)?;
        track_jwt_issued();

        let primary_role = roles
            .iter()
            .find(|r| r.is_active)
            .map(|r| r.role_type.to_ascii_lowercase())
            .unwrap_or_else(|| "none".to_string());

        Ok((token, primary_role))
    }
}
