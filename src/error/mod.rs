//! API Error Module
//!
//! This module defines the error taxonomy used across all HTTP handlers.
//! Every domain failure is mapped to exactly one variant, and the boundary
//! layer (the `IntoResponse` impl) picks the HTTP status from the variant.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # Taxonomy
//!
//! - `Validation` - malformed/missing input (400)
//! - `InvalidCredentials` - bad email/password, deliberately generic (400)
//! - `Unauthorized` - no or unparseable credential (401)
//! - `Forbidden` - credential present but rejected (403)
//! - `NotFound` - missing or foreign-owned resource (404)
//! - `Database` / `Hash` / `Token` - internal failures (500, generic body)

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::ApiError;
