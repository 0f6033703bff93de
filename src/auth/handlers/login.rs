/**
 * Login Handler
 *
 * Implements POST /auth/login.
 *
 * # Authentication Process
 *
 * 1. Look up the user by email
 * 2. Verify the password with bcrypt
 * 3. Issue a fresh access + refresh token pair
 * 4. Persist the refresh token on the user row, overwriting any prior
 *    value (this logs out any other active session for the user)
 * 5. Return the access token and set the refresh cookie
 *
 * # Security
 *
 * An unknown email and a wrong password produce the same generic 400,
 * so the endpoint cannot be used to enumerate accounts.
 */

use axum::{extract::State, response::Json};
use axum_extra::extract::CookieJar;

use crate::auth::cookies::refresh_cookie;
use crate::auth::handlers::types::{AccessTokenResponse, LoginRequest};
use crate::auth::users::{get_user_by_email, set_refresh_token};
use crate::auth::validation::validate_login;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Login handler
///
/// # Errors
///
/// * `400` - validation failure or invalid credentials
/// * `500` - database, hashing or signing failure
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<LoginRequest>,
) -> Result<(CookieJar, Json<AccessTokenResponse>), ApiError> {
    validate_login(&request)?;

    let user = get_user_by_email(&state.pool, &request.email)
        .await?
        .ok_or(ApiError::InvalidCredentials)?;

    // bcrypt::verify returns Ok(false) on mismatch; only a corrupt hash
    // is an actual error.
    if !bcrypt::verify(&request.password, &user.password_hash)? {
        tracing::warn!("Failed login attempt for user {}", user.id);
        return Err(ApiError::InvalidCredentials);
    }

    let access_token = state.keys.issue_access(user.id)?;
    let refresh_token = state.keys.issue_refresh(user.id)?;

    // Single-session invalidation point: any refresh token from an
    // earlier login stops working here.
    set_refresh_token(&state.pool, user.id, &refresh_token).await?;

    tracing::info!("User logged in: {}", user.id);

    let jar = jar.add(refresh_cookie(refresh_token, state.cookie_secure));
    Ok((jar, Json(AccessTokenResponse { access_token })))
}
