/**
 * Refresh Handler
 *
 * Implements POST /auth/refresh. Exchanges a valid refresh cookie for a
 * new access token, rotating the refresh token in the process.
 *
 * # Rotation
 *
 * The presented token must match the value stored on the user row. On
 * success a new pair is issued and the stored value is replaced with a
 * compare-and-swap, so the old refresh token becomes permanently
 * unusable - even if it has not expired, and even if two refreshes race
 * (the loser's CAS affects zero rows and fails with 403).
 *
 * # Status Codes
 *
 * * `401` - no refresh cookie present
 * * `403` - signature/expiry failure, unknown user, or a stale token
 *   (replay of a value already superseded by rotation, login or logout)
 */

use axum::{extract::State, response::Json};
use axum_extra::extract::CookieJar;

use crate::auth::cookies::{refresh_cookie, REFRESH_COOKIE};
use crate::auth::handlers::types::AccessTokenResponse;
use crate::auth::sessions::KeyKind;
use crate::auth::users::{get_user_by_id, rotate_refresh_token};
use crate::error::ApiError;
use crate::server::state::AppState;

/// Refresh handler
pub async fn refresh(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, Json<AccessTokenResponse>), ApiError> {
    let presented = jar
        .get(REFRESH_COOKIE)
        .map(|c| c.value().to_string())
        .ok_or_else(|| {
            ApiError::unauthorized("No autorizado: No se proporcionó token de actualización")
        })?;

    let user_id = state
        .keys
        .verify(&presented, KeyKind::Refresh)
        .map_err(|_| {
            ApiError::forbidden("No autorizado: Token de actualización inválido o expirado")
        })?;

    let user = get_user_by_id(&state.pool, user_id)
        .await?
        .ok_or_else(|| ApiError::forbidden("No autorizado: Token de actualización inválido"))?;

    // A well-signed token that is not the stored value is a replay of a
    // superseded session.
    if user.refresh_token.as_deref() != Some(presented.as_str()) {
        tracing::warn!("Stale refresh token presented for user {}", user.id);
        return Err(ApiError::forbidden(
            "No autorizado: Token de actualización inválido",
        ));
    }

    let access_token = state.keys.issue_access(user.id)?;
    let new_refresh_token = state.keys.issue_refresh(user.id)?;

    let rotated =
        rotate_refresh_token(&state.pool, user.id, &presented, &new_refresh_token).await?;
    if !rotated {
        // Lost a race against a concurrent refresh or logout.
        tracing::warn!("Refresh rotation lost for user {}", user.id);
        return Err(ApiError::forbidden(
            "No autorizado: Token de actualización inválido",
        ));
    }

    tracing::debug!("Refresh token rotated for user {}", user.id);

    let jar = jar.add(refresh_cookie(new_refresh_token, state.cookie_secure));
    Ok((jar, Json(AccessTokenResponse { access_token })))
}
