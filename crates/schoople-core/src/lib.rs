//! # Schoople Core
//!
//! Core types, errors, and utilities for the Schoople API.
//!
//! - [`errors`]: Application error taxonomy with HTTP response conversion
//! - [`password`]: bcrypt hashing and timing-uniform verification
//! - [`clock`]: Injectable time source
//!
//! # Example
//!
//! ```ignore
//! use schoople_core::errors::AppError;
//! use schoople_core::password::{hash_password, verify_password};
//!
//! let error = AppError::not_found(anyhow::anyhow!("Student not found"));
//! let hash = hash_password("secure_password")?;
//! ```

pub mod clock;
pub mod errors;
pub mod password;

pub use clock::{Clock, FixedClock, SystemClock};
pub use errors::{AppError, ErrorKind};
pub use password::{hash_password, verify_password, verify_password_or_dummy};
