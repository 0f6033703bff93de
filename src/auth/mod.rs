//! Authentication Module
//!
//! User accounts, the JWT token pair, and session rotation.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs        - Module exports
//! ├── users.rs      - User model and database operations
//! ├── sessions.rs   - Token issuer (two signing keys, issue/verify)
//! ├── cookies.rs    - Refresh-token cookie builders
//! ├── validation.rs - Register/login input validation
//! └── handlers/     - HTTP handlers for /auth endpoints
//! ```
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage
//! - Access tokens (1h) and refresh tokens (7d) are signed with
//!   independent secrets, so one can never stand in for the other
//! - Exactly one refresh token is stored per user; login and refresh
//!   overwrite it, which revokes any previously issued value

/// User model and database operations
pub mod users;

/// JWT issuance and verification
pub mod sessions;

/// Refresh-token cookie builders
pub mod cookies;

/// Input validation for auth requests
pub mod validation;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{get_profile, login, logout, refresh, register};
pub use sessions::{KeyKind, SigningKeys};
