//! Password hashing and verification using bcrypt.
//!
//! [`verify_password_or_dummy`] keeps login timing uniform: when no stored hash
//! exists for a username it still runs a full bcrypt comparison against a
//! process-wide dummy hash. Stored hashes must use [`PASSWORD_COST`] for the
//! two paths to take the same time.

use std::sync::OnceLock;

use bcrypt::{DEFAULT_COST, hash, verify};

use crate::errors::AppError;

/// Bcrypt cost of every account password and of the dummy hash.
pub const PASSWORD_COST: u32 = DEFAULT_COST;

static DUMMY_HASH: OnceLock<Option<String>> = OnceLock::new();

pub fn hash_password(password: &str) -> Result<String, AppError> {
    hash_password_with_cost(password, PASSWORD_COST)
}

/// Hashes with an explicit bcrypt cost. Fixtures use the minimum cost (4).
pub fn hash_password_with_cost(password: &str, cost: u32) -> Result<String, AppError> {
    hash(password, cost)
        .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to hash password: {}", e)))
}

pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    verify(password, hash)
        .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to verify password: {}", e)))
}

fn dummy_hash() -> Option<&'static str> {
    DUMMY_HASH
        .get_or_init(|| hash("schoople-dummy-password", PASSWORD_COST).ok())
        .as_deref()
}

/// Cost field of a modular-crypt bcrypt hash (`$2b$12$...`).
pub fn hash_cost(hash: &str) -> Option<u32> {
    hash.split('$').nth(2)?.parse().ok()
}

/// Cost the unknown-user path pays.
pub fn dummy_hash_cost() -> Option<u32> {
    dummy_hash().and_then(hash_cost)
}

/// Verifies `password` against `stored`, or against the dummy hash when `stored` is `None`.
///
/// Returns `true` only for a real hash that matches. A stored hash bcrypt cannot
/// parse counts as a mismatch.
pub fn verify_password_or_dummy(password: &str, stored: Option<&str>) -> bool {
    match stored {
        Some(stored) => match verify(password, stored) {
            Ok(valid) => valid,
            Err(e) => {
                tracing::warn!(error = %e, "stored password hash is unreadable");
                false
            }
        },
        None => {
            if let Some(dummy) = dummy_hash() {
                let _ = verify(password, dummy);
            }
            false
        }
    }
}
