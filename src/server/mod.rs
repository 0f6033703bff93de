//! Server Module
//!
//! Configuration loading, application state, and app assembly.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs    - Module exports
//! ├── config.rs - Environment configuration
//! ├── state.rs  - AppState
//! └── init.rs   - Pool connection, migrations, router assembly
//! ```

/// Environment configuration
pub mod config;

/// Application state
pub mod state;

/// Pool, migrations and app assembly
pub mod init;

pub use config::Config;
pub use state::AppState;
