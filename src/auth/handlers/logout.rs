/**
 * Logout Handler
 *
 * Implements POST /auth/logout. Idempotent: with no cookie, with an
 * unverifiable cookie, or called twice, it always answers 204.
 *
 * Server-side revocation is best-effort - if the presented refresh
 * token still decodes to a known user, that user's stored token is
 * cleared so it can no longer be rotated. The cookie is cleared
 * client-side regardless.
 */

use axum::{extract::State, http::StatusCode};
use axum_extra::extract::CookieJar;

use crate::auth::cookies::{clear_refresh_cookie, REFRESH_COOKIE};
use crate::auth::sessions::KeyKind;
use crate::auth::users::clear_refresh_token;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Logout handler
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, StatusCode), ApiError> {
    let Some(presented) = jar.get(REFRESH_COOKIE).map(|c| c.value().to_string()) else {
        return Ok((jar, StatusCode::NO_CONTENT));
    };

    // Verification failure is swallowed: an expired or forged token
    // still results in a cleared cookie and a 204.
    if let Ok(user_id) = state.keys.verify(&presented, KeyKind::Refresh) {
        clear_refresh_token(&state.pool, user_id).await?;
        tracing::info!("User logged out: {}", user_id);
    }

    let jar = jar.add(clear_refresh_cookie(state.cookie_secure));
    Ok((jar, StatusCode::NO_CONTENT))
}
