use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};

use schoople_auth::{Claims, verify_token};
use schoople_core::AppError;
use schoople_models::ids::{StudentId, UserId};
use schoople_models::users::User;
use schoople_observability::track_jwt_validation;

use crate::state::AppState;

/// The verified identity behind a bearer token.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    pub fn user_id(&self) -> Result<UserId, AppError> {
        self.0.user_id()
    }

    pub fn is_admin(&self) -> bool {
        self.0.is_admin()
    }

    /// Owner of the student record, or admin. Ownership comes from the
    /// caller's current account row, not the link captured in the token.
    pub fn ensure_can_view_student(
        &self,
        account: &User,
        student_id: StudentId,
    ) -> Result<(), AppError> {
        if self.is_admin() || account.student_id == Some(student_id) {
            Ok(())
        } else {
            Err(AppError::forbidden(
                "You are not allowed to access this student's data",
            ))
        }
    }

    /// The user themself, or admin.
    pub fn ensure_can_view_user(&self, user_id: UserId) -> Result<(), AppError> {
        if self.is_admin() || self.user_id()? == user_id {
            Ok(())
        } else {
            Err(AppError::forbidden("You are not allowed to access this user"))
        }
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(user) = parts.extensions.get::<AuthUser>() {
            return Ok(user.clone());
        }

        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| {
                    track_jwt_validation(false);
                    AppError::unauthenticated("Missing or invalid authorization header")
                })?;

        let claims = verify_token(bearer.token(), &state.jwt_config, state.clock.now())
            .inspect_err(|_| track_jwt_validation(false))?;
        track_jwt_validation(true);

        Ok(AuthUser(claims))
    }
}

/// Route layer rejecting requests without a valid bearer token.
pub async fn require_auth(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();
    let auth_user = AuthUser::from_request_parts(&mut parts, &state).await?;
    parts.extensions.insert(auth_user);

    Ok(next.run(Request::from_parts(parts, body)).await)
}
