//! Login request and response DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::students::StudentProfile;

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "username must not be empty"))]
    #[schema(example = "student100")]
    pub username: String,
    #[validate(length(min = 1, message = "password must not be empty"))]
    #[schema(example = "password123")]
    pub password: String,
}

/// Successful login.
///
/// `student_data` is the caller's student profile when the account is linked to
/// a student, and `null` for staff and admin accounts.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
    pub student_data: Option<StudentProfile>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_rejects_empty_fields() {
        let dto = LoginRequest {
            username: String::new(),
            password: "x".to_string(),
        };
        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("username"));
    }

    #[test]
    fn test_login_request_accepts_filled_fields() {
        let dto = LoginRequest {
            username: "alice".to_string(),
            password: "secret".to_string(),
        };
        assert!(dto.validate().is_ok());
    }
}
