//! HS256 access tokens.
//!
//! `exp` is enforced here rather than by `jsonwebtoken` so that the current
//! time comes from the injected clock. There is no leeway: a token is rejected
//! from its expiry second onwards.

use anyhow::anyhow;
use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use schoople_config::JwtConfig;
use schoople_core::AppError;
use schoople_models::users::{Role, User};

use crate::claims::Claims;

/// Issues an access token for `user`, embedding the types of its active roles.
///
/// # Errors
///
/// Returns an internal error if encoding fails.
pub fn create_access_token(
    user: &User,
    roles: &[Role],
    jwt_config: &JwtConfig,
    now: DateTime<Utc>,
) -> Result<String, AppError> {
    let iat = now.timestamp();
    let mut role_types: Vec<String> = roles
        .iter()
        .filter(|role| role.is_active)
        .map(|role| role.role_type.to_ascii_lowercase())
        .collect();
    role_types.sort();
    role_types.dedup();

    let claims = Claims {
        sub: user.id.to_string(),
        username: user.username.clone(),
        student_id: user.student_id,
        roles: role_types,
        exp: iat + jwt_config.access_token_expiry,
        iat,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(anyhow!("Failed to create token: {e}")))
}

/// Verifies signature and expiry of an access token.
///
/// # Errors
///
/// Returns an unauthenticated error for a malformed, forged or expired token.
pub fn verify_token(
    token: &str,
    jwt_config: &JwtConfig,
    now: DateTime<Utc>,
) -> Result<Claims, AppError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = false;
    validation.leeway = 0;

    let claims = decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthenticated("Invalid or expired token"))?;

    if now.timestamp() >= claims.exp {
        return Err(AppError::unauthenticated("Invalid or expired token"));
    }

    Ok(claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use schoople_core::ErrorKind;
    use schoople_models::ids::{RoleId, StudentId, UserId};

    fn config() -> JwtConfig {
        JwtConfig::new("test-secret-key-at-least-32-characters-long")
    }

    fn issued_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 8, 0, 0).unwrap()
    }

    fn student_user() -> User {
        User {
            id: UserId(7),
            student_id: Some(StudentId(100)),
            username: "student100".to_string(),
            password: String::new(),
            is_active: true,
            ..Default::default()
        }
    }

    fn roles() -> Vec<Role> {
        vec![
            Role {
                id: RoleId(3),
                role_name: "Student".to_string(),
                role_type: "student".to_string(),
                is_active: true,
            },
            Role {
                id: RoleId(4),
                role_name: "Retired admin".to_string(),
                role_type: "admin".to_string(),
                is_active: false,
            },
        ]
    }

    #[test]
    fn test_token_round_trips_identity() {
        let token = create_access_token(&student_user(), &roles(), &config(), issued_at()).unwrap();
        let claims = verify_token(&token, &config(), issued_at()).unwrap();

        assert_eq!(claims.user_id().unwrap(), UserId(7));
        assert_eq!(claims.student_id, Some(StudentId(100)));
        assert_eq!(claims.username, "student100");
        assert_eq!(claims.roles, vec!["student".to_string()]);
        assert_eq!(claims.exp - claims.iat, 1800);
    }

    #[test]
    fn test_inactive_roles_are_not_embedded() {
        let token = create_access_token(&student_user(), &roles(), &config(), issued_at()).unwrap();
        let claims = verify_token(&token, &config(), issued_at()).unwrap();
        assert!(!claims.is_admin());
    }

    #[test]
    fn test_token_accepted_before_expiry() {
        let token = create_access_token(&student_user(), &[], &config(), issued_at()).unwrap();
        let later = issued_at() + Duration::minutes(29);
        assert!(verify_token(&token, &config(), later).is_ok());
    }

    #[test]
    fn test_token_rejected_after_expiry() {
        let token = create_access_token(&student_user(), &[], &config(), issued_at()).unwrap();

        let at_expiry = issued_at() + Duration::minutes(30);
        assert!(verify_token(&token, &config(), at_expiry).is_err());

        let later = issued_at() + Duration::minutes(31);
        let err = verify_token(&token, &config(), later).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthenticated);
    }

    #[test]
    fn test_verify_token_invalid() {
        let err = verify_token("invalid-token", &config(), issued_at()).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthenticated);
    }

    #[test]
    fn test_verify_token_wrong_secret() {
        let token = create_access_token(&student_user(), &[], &config(), issued_at()).unwrap();
        let other = JwtConfig::new("a-completely-different-secret-value");
        assert!(verify_token(&token, &other, issued_at()).is_err());
    }

    #[test]
    fn test_custom_expiry_is_honoured() {
        let mut short = config();
        short.access_token_expiry = 60;
        let token = create_access_token(&student_user(), &[], &short, issued_at()).unwrap();

        assert!(verify_token(&token, &short, issued_at() + Duration::seconds(59)).is_ok());
        assert!(verify_token(&token, &short, issued_at() + Duration::seconds(61)).is_err());
    }
}
