//! Request guards.
//!
//! Every route except login, health and the docs sits behind [`auth::require_auth`],
//! applied as a route layer. Handlers then take [`auth::AuthUser`], which reuses the
//! identity the layer already verified.

pub mod auth;
