//! Projects Module
//!
//! Owner-scoped project storage. The HTTP handlers live in
//! `api::projects`; this module holds the model and queries.

/// Project model and database operations
pub mod db;

pub use db::Project;
