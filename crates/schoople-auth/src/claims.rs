//! Access token claims.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use schoople_core::AppError;
use schoople_models::ids::{StudentId, UserId};
use schoople_models::users::RoleType;

/// Payload of an access token.
///
/// Carries enough identity to decide ownership and elevated access without a
/// database round trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Claims {
    /// User id (subject claim), as a decimal string.
    pub sub: String,
    pub username: String,
    /// Student the account is linked to, if any.
    #[schema(value_type = Option<i32>)]
    pub student_id: Option<StudentId>,
    /// Role types of the user's active roles, e.g. `["student"]`.
    pub roles: Vec<String>,
    /// Expiration (Unix seconds)
    pub exp: i64,
    /// Issued-at (Unix seconds)
    pub iat: i64,
}

impl Claims {
    pub fn user_id(&self) -> Result<UserId, AppError> {
        self.sub
            .parse()
            .map_err(|_| AppError::unauthenticated("Invalid or expired token"))
    }

    pub fn has_role(&self, role: RoleType) -> bool {
        self.roles
            .iter()
            .any(|r| r.parse::<RoleType>().is_ok_and(|parsed| parsed == role))
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(RoleType::Admin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(roles: &[&str]) -> Claims {
        Claims {
            sub: "7".to_string(),
            username: "alice".to_string(),
            student_id: Some(StudentId(100)),
            roles: roles.iter().map(|r| r.to_string()).collect(),
            exp: 1_800,
            iat: 0,
        }
    }

    #[test]
    fn test_user_id_parses_subject() {
        assert_eq!(claims(&[]).user_id().unwrap(), UserId(7));
    }

    #[test]
    fn test_user_id_rejects_garbage_subject() {
        let mut c = claims(&[]);
        c.sub = "abc".to_string();
        assert!(c.user_id().is_err());
    }

    #[test]
    fn test_is_admin() {
        assert!(claims(&["staff", "Admin"]).is_admin());
        assert!(!claims(&["student"]).is_admin());
        assert!(claims(&["student"]).has_role(RoleType::Student));
    }

    #[test]
    fn test_claims_serialization_shape() {
        let json = serde_json::to_value(claims(&["student"])).unwrap();
        assert_eq!(json["sub"], "7");
        assert_eq!(json["student_id"], 100);
        assert_eq!(json["roles"][0], "student");
    }
}
