//! Projex - Multi-Tenant Project API
//!
//! A small multi-tenant backend exposing authentication and CRUD
//! endpoints for users and projects, plus a static pricing catalog.
//!
//! # Overview
//!
//! - JWT session scheme: short-lived access tokens, rotated refresh
//!   tokens persisted per user (single active session)
//! - Access Guard middleware on every protected route (stateless check)
//! - Owner-scoped project storage: cross-tenant reads answer 404
//! - Uniform error taxonomy mapped to HTTP statuses at the boundary
//!
//! # Module Structure
//!
//! - **`server`** - configuration, state, app assembly
//! - **`routes`** - router construction
//! - **`auth`** - users, token issuance, session handlers
//! - **`middleware`** - Access Guard
//! - **`projects`** - project model and owner-scoped queries
//! - **`api`** - user and project HTTP handlers
//! - **`pricing`** - injected plan catalog and its endpoints
//! - **`error`** - `ApiError` taxonomy and response mapping

/// Configuration, state and app assembly
pub mod server;

/// Router construction
pub mod routes;

/// Authentication: users, tokens, session handlers
pub mod auth;

/// Request middleware (Access Guard)
pub mod middleware;

/// Project model and queries
pub mod projects;

/// Resource HTTP handlers
pub mod api;

/// Pricing catalog and endpoints
pub mod pricing;

/// Error taxonomy
pub mod error;
