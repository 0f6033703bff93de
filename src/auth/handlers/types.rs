/**
 * Authentication Handler Types
 *
 * Request and response bodies shared by the authentication handlers.
 */

use serde::{Deserialize, Serialize};

/// Registration request body
#[derive(Debug, Deserialize, Serialize)]
pub struct RegisterRequest {
    /// User's display name
    pub nombre: String,
    /// User's email address (unique)
    pub email: String,
    /// Plaintext password (hashed before storage, never persisted as-is)
    pub password: String,
}

/// Login request body
#[derive(Debug, Deserialize, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Access-token response, returned by login and refresh
///
/// The refresh token never appears in a body; it travels only in the
/// HTTP-only cookie.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessTokenResponse {
    pub access_token: String,
}

/// Plain message response
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
