/**
 * Access Guard Middleware
 *
 * Middleware protecting every bearer-authenticated route. It extracts
 * the token from the Authorization header, verifies it against the
 * access signing key, and attaches the authenticated user ID to the
 * request extensions.
 *
 * There is deliberately no database lookup on this path: access tokens
 * are stateless, so a request costs no store round-trip. The trade-off
 * is that a user deleted mid-token-lifetime stays "authenticated" until
 * the token expires.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::auth::sessions::KeyKind;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Authenticated user identity attached to the request by the guard
#[derive(Debug, Clone, Copy)]
pub struct AuthUser(pub Uuid);

/// Access Guard
///
/// # Status Codes
///
/// * `401` - Authorization header absent or not `Bearer <token>`
/// * `403` - token present but invalid or expired
pub async fn access_guard(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            ApiError::unauthorized("No autorizado: Token no proporcionado")
        })?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("Malformed Authorization header");
        ApiError::unauthorized("No autorizado: Token no proporcionado")
    })?;

    let user_id = state.keys.verify(token, KeyKind::Access).map_err(|_| {
        ApiError::forbidden("No autorizado: Token inválido o expirado")
    })?;

    request.extensions_mut().insert(AuthUser(user_id));

    Ok(next.run(request).await)
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<AuthUser>().copied().ok_or_else(|| {
            tracing::warn!("AuthUser missing from request extensions");
            ApiError::unauthorized("No autorizado: Usuario no autenticado")
        })
    }
}
