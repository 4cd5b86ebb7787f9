//! User accounts, roles and role assignments.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::ids::{RoleId, StaffId, StudentId, UserId, UserRoleId};

/// A login account, optionally linked to a staff member or a student.
#[derive(Debug, Clone, Default, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: UserId,
    pub staff_id: Option<StaffId>,
    pub student_id: Option<StudentId>,
    pub username: String,
    /// bcrypt hash. Never serialized.
    #[serde(skip_serializing)]
    pub password: String,
    pub is_active: bool,
}

/// The broad category a role belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RoleType {
    Admin,
    Staff,
    Student,
}

impl RoleType {
    pub fn as_str(self) -> &'static str {
        match self {
            RoleType::Admin => "admin",
            RoleType::Staff => "staff",
            RoleType::Student => "student",
        }
    }
}

impl fmt::Display for RoleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoleType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(RoleType::Admin),
            "staff" => Ok(RoleType::Staff),
            "student" => Ok(RoleType::Student),
            other => Err(format!("unknown role type: {other}")),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, FromRow)]
pub struct Role {
    pub id: RoleId,
    pub role_name: String,
    /// Stored as free text; see [`RoleType`] for the recognised values.
    pub role_type: String,
    pub is_active: bool,
}

impl Role {
    pub fn kind(&self) -> Option<RoleType> {
        self.role_type.parse().ok()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, FromRow)]
pub struct UserRole {
    pub id: UserRoleId,
    pub user_id: UserId,
    pub role_id: RoleId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RoleSummary {
    pub role_name: String,
    pub role_type: String,
}

impl From<Role> for RoleSummary {
    fn from(role: Role) -> Self {
        Self {
            role_name: role.role_name,
            role_type: role.role_type,
        }
    }
}

/// Response of `GET /api/userbyid/{user_id}`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserRolesResponse {
    pub username: String,
    pub roles: Vec<RoleSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RoleAssignment {
    pub user_id: UserId,
    pub role_id: RoleId,
}

impl From<UserRole> for RoleAssignment {
    fn from(assignment: UserRole) -> Self {
        Self {
            user_id: assignment.user_id,
            role_id: assignment.role_id,
        }
    }
}

/// Response of `GET /api/user/{user_id}`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserTokenResponse {
    pub token: String,
    pub user_data: Vec<RoleAssignment>,
}
