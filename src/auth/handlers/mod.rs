//! Authentication Handlers Module
//!
//! HTTP handlers for the authentication endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports
//! ├── types.rs    - Request and response types
//! ├── register.rs - POST /auth/register
//! ├── login.rs    - POST /auth/login
//! ├── refresh.rs  - POST /auth/refresh
//! ├── logout.rs   - POST /auth/logout
//! └── profile.rs  - GET /auth/profile
//! ```
//!
//! # Session Flow
//!
//! 1. **Register**: create the account (no tokens issued)
//! 2. **Login**: verify credentials, issue an access token in the body
//!    and a refresh token in an HTTP-only cookie
//! 3. **Refresh**: exchange the cookie for a new pair; the old refresh
//!    token is rotated out and can never be used again
//! 4. **Logout**: clear the stored refresh token and the cookie (204,
//!    idempotent)

/// Request and response types
pub mod types;

/// Registration handler
pub mod register;

/// Login handler
pub mod login;

/// Refresh handler
pub mod refresh;

/// Logout handler
pub mod logout;

/// Profile handler
pub mod profile;

pub use types::{AccessTokenResponse, LoginRequest, MessageResponse, RegisterRequest};

pub use login::login;
pub use logout::logout;
pub use profile::get_profile;
pub use refresh::refresh;
pub use register::register;
