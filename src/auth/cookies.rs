/**
 * Refresh Token Cookie
 *
 * Builders for the `refreshToken` session cookie. The cookie is always
 * HTTP-only so scripts cannot read it; the `Secure` attribute follows
 * the deployment environment (`APP_ENV=production`).
 */

use axum_extra::extract::cookie::{Cookie, SameSite};
use time::Duration;

/// Cookie name carrying the refresh token
pub const REFRESH_COOKIE: &str = "refreshToken";

/// Cookie lifetime, matching the refresh token's 7-day expiry
const REFRESH_COOKIE_MAX_AGE: Duration = Duration::days(7);

/// Build the refresh-token cookie set on login and refresh
pub fn refresh_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((REFRESH_COOKIE, token))
        .path("/")
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .max_age(REFRESH_COOKIE_MAX_AGE)
        .build()
}

/// Build an expired cookie that clears the client-side session marker
pub fn clear_refresh_cookie(secure: bool) -> Cookie<'static> {
    Cookie::build((REFRESH_COOKIE, ""))
        .path("/")
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .max_age(Duration::ZERO)
        .build()
}
