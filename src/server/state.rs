/**
 * Application State
 *
 * The central state container shared by all handlers. Everything in it
 * is cheap to clone: the pool is internally reference-counted and the
 * signing keys and pricing catalog sit behind `Arc`s.
 */

use std::sync::Arc;

use sqlx::PgPool;

use crate::auth::sessions::SigningKeys;
use crate::pricing::PricingCatalog;
use crate::server::config::Config;

/// Application state
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool (the credential and project store)
    pub pool: PgPool,
    /// Signing key material for both token kinds
    pub keys: Arc<SigningKeys>,
    /// Injected read-only pricing catalog
    pub pricing: Arc<PricingCatalog>,
    /// Secure flag for the refresh cookie
    pub cookie_secure: bool,
}

impl AppState {
    /// Assemble state from configuration and an established pool
    pub fn new(config: &Config, pool: PgPool) -> Self {
        Self {
            pool,
            keys: Arc::new(SigningKeys::new(
                &config.jwt_secret,
                &config.jwt_refresh_secret,
            )),
            pricing: Arc::new(PricingCatalog::default()),
            cookie_secure: config.cookie_secure,
        }
    }
}
