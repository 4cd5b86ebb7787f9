//! # Schoople Auth
//!
//! Bearer token handling for the Schoople API.
//!
//! - [`claims`]: The access token payload
//! - [`jwt`]: Issuing and verifying HS256 access tokens
//!
//! Tokens are stateless: there is no refresh token and no revocation list.
//! Expiry is checked against the caller-supplied time so tests can pin it.
//!
//! # Example
//!
//! ```ignore
//! use schoople_auth::{create_access_token, verify_token};
//! use schoople_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//! let token = create_access_token(&user, &roles, &config, clock.now())?;
//! let claims = verify_token(&token, &config, clock.now())?;
//! assert_eq!(claims.user_id()?, user.id);
//! ```

pub mod claims;
pub mod jwt;

pub use claims::Claims;
pub use jwt::{create_access_token, verify_token};
