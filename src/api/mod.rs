//! API Module
//!
//! HTTP handlers for the bearer-guarded resource endpoints.
//!
//! - **`users`** - GET /users, GET /users/{id}
//! - **`projects`** - owner-scoped project CRUD

/// User read endpoints
pub mod users;

/// Project CRUD endpoints
pub mod projects;
