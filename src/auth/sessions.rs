/**
 * Session Tokens
 *
 * This module issues and verifies the JWT token pair: a short-lived
 * access token (1 hour) and a longer-lived refresh token (7 days), each
 * signed with its own independent secret. Access tokens are stateless;
 * refresh tokens are additionally persisted on the user row (see
 * `auth::users`) so they can be revoked and rotated.
 */

use jsonwebtoken::{
    decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;
use uuid::Uuid;

/// Access token lifetime: 1 hour
const ACCESS_TTL_SECS: u64 = 60 * 60;

/// Refresh token lifetime: 7 days
const REFRESH_TTL_SECS: u64 = 7 * 24 * 60 * 60;

/// Which signing key a token belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    Access,
    Refresh,
}

/// Token verification failure
///
/// Expired tokens, bad signatures, cross-key tokens and malformed claims
/// all collapse into `Invalid`: callers must not be able to tell which
/// check failed.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Token inválido o expirado")]
    Invalid,
}

/// JWT claims carried by both token kinds
///
/// Decoding is strict: a token whose payload does not match this shape
/// (missing fields, non-UUID subject) fails verification.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID (UUID, stringified)
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

/// Signing key material for both token kinds
///
/// Built once at startup from the configured secrets and shared through
/// `AppState`. Keeping the keys here (rather than reading the environment
/// on every call) lets tests substitute their own secrets.
pub struct SigningKeys {
    access_encoding: EncodingKey,
    access_decoding: DecodingKey,
    refresh_encoding: EncodingKey,
    refresh_decoding: DecodingKey,
}

impl SigningKeys {
    pub fn new(access_secret: &str, refresh_secret: &str) -> Self {
        Self {
            access_encoding: EncodingKey::from_secret(access_secret.as_ref()),
            access_decoding: DecodingKey::from_secret(access_secret.as_ref()),
            refresh_encoding: EncodingKey::from_secret(refresh_secret.as_ref()),
            refresh_decoding: DecodingKey::from_secret(refresh_secret.as_ref()),
        }
    }

    /// Issue an access token for a user
    pub fn issue_access(&self, user_id: Uuid) -> Result<String, jsonwebtoken::errors::Error> {
        self.issue(user_id, ACCESS_TTL_SECS, &self.access_encoding)
    }

    /// Issue a refresh token for a user
    pub fn issue_refresh(&self, user_id: Uuid) -> Result<String, jsonwebtoken::errors::Error> {
        self.issue(user_id, REFRESH_TTL_SECS, &self.refresh_encoding)
    }

    fn issue(
        &self,
        user_id: Uuid,
        ttl_secs: u64,
        key: &EncodingKey,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = unix_now();
        let claims = Claims {
            sub: user_id.to_string(),
            exp: now + ttl_secs,
            iat: now,
        };
        encode(&Header::default(), &claims, key)
    }

    /// Verify a token against one key kind and extract the user ID
    ///
    /// # Errors
    ///
    /// `TokenError::Invalid` on expiry, bad signature, wrong key kind or
    /// malformed claims.
    pub fn verify(&self, token: &str, kind: KeyKind) -> Result<Uuid, TokenError> {
        let key = match kind {
            KeyKind::Access => &self.access_decoding,
            KeyKind::Refresh => &self.refresh_decoding,
        };

        let validation = Validation::new(Algorithm::HS256);
        let data = decode::<Claims>(token, key, &validation).map_err(|e| {
            tracing::debug!("Token verification failed: {:?}", e.kind());
            TokenError::Invalid
        })?;

        Uuid::parse_str(&data.claims.sub).map_err(|_| TokenError::Invalid)
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
