/**
 * Server Configuration
 *
 * This module loads the server configuration from environment variables.
 *
 * # Configuration Sources
 *
 * - `DATABASE_URL` - PostgreSQL connection string (required)
 * - `JWT_SECRET` - access-token signing secret (required)
 * - `JWT_REFRESH_SECRET` - refresh-token signing secret (required)
 * - `SERVER_PORT` - listen port (default 3000)
 * - `APP_ENV` - `production` enables the secure flag on the refresh cookie
 *
 * # Error Handling
 *
 * Missing signing secrets or database URL are startup-fatal: no handler
 * can issue or verify tokens without them, so the server refuses to start
 * rather than fail every request at runtime.
 */

use thiserror::Error;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} no está definido en las variables de entorno")]
    MissingVar(&'static str),
}

/// Server configuration loaded once at startup
#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL connection string
    pub database_url: String,
    /// Secret for signing/verifying access tokens
    pub jwt_secret: String,
    /// Independent secret for refresh tokens. A leaked access token can
    /// never be replayed as a refresh token because the keys differ.
    pub jwt_refresh_secret: String,
    /// Listen port
    pub port: u16,
    /// Whether the refresh cookie carries the `Secure` attribute
    pub cookie_secure: bool,
}

impl Config {
    /// Load configuration from the environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingVar` if `DATABASE_URL`, `JWT_SECRET`
    /// or `JWT_REFRESH_SECRET` is absent.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = require_var("DATABASE_URL")?;
        let jwt_secret = require_var("JWT_SECRET")?;
        let jwt_refresh_secret = require_var("JWT_REFRESH_SECRET")?;

        let port = std::env::var("SERVER_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);

        let cookie_secure = std::env::var("APP_ENV")
            .map(|env| env == "production")
            .unwrap_or(false);

        Ok(Self {
            database_url,
            jwt_secret,
            jwt_refresh_secret,
            port,
            cookie_secure,
        })
    }
}

fn require_var(name: &'static str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => {
            tracing::error!("Missing required environment variable: {}", name);
            Err(ConfigError::MissingVar(name))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn set_required_vars() {
        std::env::set_var("DATABASE_URL", "postgres://localhost/projex_test");
        std::env::set_var("JWT_SECRET", "access-secret");
        std::env::set_var("JWT_REFRESH_SECRET", "refresh-secret");
    }

    #[test]
    #[serial]
    fn test_defaults() {
        set_required_vars();
        std::env::remove_var("SERVER_PORT");
        std::env::remove_var("APP_ENV");

        let config = Config::from_env().unwrap();
        assert_eq!(config.port, 3000);
        assert!(!config.cookie_secure);
    }

    #[test]
    #[serial]
    fn test_missing_secret_is_fatal() {
        set_required_vars();
        std::env::remove_var("JWT_REFRESH_SECRET");

        let result = Config::from_env();
        assert!(matches!(
            result,
            Err(ConfigError::MissingVar("JWT_REFRESH_SECRET"))
        ));
    }

    #[test]
    #[serial]
    fn test_production_enables_secure_cookie() {
        set_required_vars();
        std::env::set_var("APP_ENV", "production");

        let config = Config::from_env().unwrap();
        assert!(config.cookie_secure);

        std::env::remove_var("APP_ENV");
    }
}
