/**
 * API Error Types
 *
 * This module defines the error types returned by HTTP handlers. Each
 * variant carries enough context to pick an HTTP status code and a
 * client-facing message; internal variants log their cause and expose
 * only a generic message to the caller.
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Domain error taxonomy for the API
///
/// Handlers return `Result<_, ApiError>`; the `IntoResponse` impl in
/// `error::conversion` maps each variant to an HTTP status and a JSON
/// `{"message": ...}` body.
///
/// # Status Code Mapping
///
/// - `Validation` - 400 Bad Request
/// - `InvalidCredentials` - 400 Bad Request (generic message, so a missing
///   account and a wrong password are indistinguishable)
/// - `Unauthorized` - 401 Unauthorized
/// - `Forbidden` - 403 Forbidden
/// - `NotFound` - 404 Not Found
/// - `Database`, `Hash`, `Token` - 500 Internal Server Error
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or missing input
    #[error("{0}")]
    Validation(String),

    /// Wrong email or password. The message is fixed and generic to
    /// prevent account enumeration.
    #[error("Credenciales inválidas")]
    InvalidCredentials,

    /// No credential, or a credential that could not be parsed
    #[error("{0}")]
    Unauthorized(String),

    /// Credential present but rejected (expired, mismatched, superseded)
    #[error("{0}")]
    Forbidden(String),

    /// Missing resource, or a resource owned by another user
    #[error("{0}")]
    NotFound(String),

    /// Database failure. Details are logged, never sent to the caller.
    #[error("Error interno del servidor")]
    Database(#[from] sqlx::Error),

    /// Password hashing failure
    #[error("Error interno del servidor")]
    Hash(#[from] bcrypt::BcryptError),

    /// Token signing failure. Verification failures are domain errors
    /// (`Unauthorized`/`Forbidden`), not this variant.
    #[error("Error interno del servidor")]
    Token(#[from] jsonwebtoken::errors::Error),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Database(_) | Self::Hash(_) | Self::Token(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Client-facing message. Internal variants render their generic
    /// `#[error]` string, never the underlying cause.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_400() {
        let error = ApiError::validation("El planId es requerido");
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(error.message(), "El planId es requerido");
    }

    #[test]
    fn test_invalid_credentials_is_generic_400() {
        let error = ApiError::InvalidCredentials;
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(error.message(), "Credenciales inválidas");
    }

    #[test]
    fn test_unauthorized_maps_to_401() {
        let error = ApiError::unauthorized("Token no proporcionado");
        assert_eq!(error.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_forbidden_maps_to_403() {
        let error = ApiError::forbidden("Token inválido o expirado");
        assert_eq!(error.status_code(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let error = ApiError::not_found("Proyecto no encontrado");
        assert_eq!(error.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_internal_errors_hide_details() {
        let error: ApiError = sqlx::Error::RowNotFound.into();
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.message(), "Error interno del servidor");
    }
}
