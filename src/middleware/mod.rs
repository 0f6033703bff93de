//! Middleware Module
//!
//! Request-processing middleware. Currently only the Access Guard,
//! which verifies bearer access tokens on protected routes.

/// Access Guard middleware and the `AuthUser` extractor
pub mod auth;

pub use auth::{access_guard, AuthUser};
