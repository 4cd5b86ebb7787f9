//! Account management: create users with bcrypt-hashed passwords and grant roles.

use anyhow::{Context, bail};
use sqlx::{PgPool, Postgres, Transaction};

use schoople_core::hash_password;
use schoople_models::ids::{RoleId, StaffId, StudentId, UserId, UserRoleId};
use schoople_models::users::RoleType;

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub student_id: Option<StudentId>,
    pub staff_id: Option<StaffId>,
    pub role: Option<RoleType>,
}

impl NewUser {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            student_id: None,
            staff_id: None,
            role: None,
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.username.trim().is_empty() {
            bail!("username must not be empty");
        }
        if self.password.is_empty() {
            bail!("password must not be empty");
        }
        if self.student_id.is_some() && self.staff_id.is_some() {
            bail!("a user links to a student or a staff member, not both");
        }
        Ok(())
    }
}

/// Inserts the user and, when `role` is set, grants the first active role of that type
/// (creating it if none exists).
pub async fn create_user(pool: &PgPool, new_user: &NewUser) -> anyhow::Result<UserId> {
    new_user.validate()?;
    let password_hash = hash_password(&new_user.password).map_err(|e| anyhow::anyhow!("{e}"))?;

    let mut tx = pool.begin().await?;

    let user_id: UserId = sqlx::query_scalar(
        r#"INSERT INTO users (username, password, student_id, staff_id, is_active)
           VALUES ($1, $2, $3, $4, true)
           RETURNING id"#,
    )
    .bind(new_user.username.trim())
    .bind(&password_hash)
    .bind(new_user.student_id)
    .bind(new_user.staff_id)
    .fetch_one(&mut *tx)
    .await
    .with_context(|| format!("failed to create user '{}'", new_user.username))?;

    if let Some(role_type) = new_user.role {
        let role_id = find_or_create_role(&mut tx, role_type).await?;
        insert_user_role(&mut tx, user_id, role_id).await?;
    }

    tx.commit().await?;
    Ok(user_id)
}

pub async fn assign_role(
    pool: &PgPool,
    user_id: UserId,
    role_id: RoleId,
) -> anyhow::Result<UserRoleId> {
    let mut tx = pool.begin().await?;

    let user_exists: bool =
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)")
            .bind(user_id)
            .fetch_one(&mut *tx)
            .await?;
    if !user_exists {
        bail!("user {user_id} does not exist");
    }

    let role_exists: bool =
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM roles WHERE id = $1)")
            .bind(role_id)
            .fetch_one(&mut *tx)
            .await?;
    if !role_exists {
        bail!("role {role_id} does not exist");
    }

    let id = insert_user_role(&mut tx, user_id, role_id).await?;
    tx.commit().await?;
    Ok(id)
}

pub(crate) async fn find_or_create_role(
    tx: &mut Transaction<'_, Postgres>,
    role_type: RoleType,
) -> anyhow::Result<RoleId> {
    let existing: Option<RoleId> = sqlx::query_scalar(
        "SELECT id FROM roles WHERE lower(role_type) = $1 AND is_active = true ORDER BY id LIMIT 1",
    )
    .bind(role_type.as_str())
    .fetch_optional(&mut **tx)
    .await?;

    if let Some(id) = existing {
        return Ok(id);
    }

    let id = sqlx::query_scalar(
        "INSERT INTO roles (role_name, role_type, is_active) VALUES ($1, $2, true) RETURNING id",
    )
    .bind(role_display_name(role_type))
    .bind(role_type.as_str())
    .fetch_one(&mut **tx)
    .await?;
    Ok(id)
}

async fn insert_user_role(
    tx: &mut Transaction<'_, Postgres>,
    user_id: UserId,
    role_id: RoleId,
) -> anyhow::Result<UserRoleId> {
    let id = sqlx::query_scalar(
        "INSERT INTO user_roles (user_id, role_id) VALUES ($1, $2) RETURNING id",
    )
    .bind(user_id)
    .bind(role_id)
    .fetch_one(&mut **tx)
    .await?;
    Ok(id)
}

pub(crate) fn role_display_name(role_type: RoleType) -> &'static str {
    match role_type {
        RoleType::Admin => "Administrator",
        RoleType::Staff => "Staff",
        RoleType::Student => "Student",
    }
}
