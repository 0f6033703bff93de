//! Routes Module
//!
//! Router assembly: public authentication routes plus the bearer-guarded
//! resource routes.

/// Router construction
pub mod router;

pub use router::create_router;
