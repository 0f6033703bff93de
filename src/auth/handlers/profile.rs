/**
 * Profile Handler
 *
 * Implements GET /auth/profile. The identity comes from the Access
 * Guard (`AuthUser`), so by the time this handler runs the bearer token
 * has already been verified.
 *
 * A valid access token can outlive its user (access checks are
 * stateless), so the lookup here can still miss and answer 404.
 */

use axum::{extract::State, response::Json};

use crate::auth::users::{get_user_by_id, UserProjection};
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::server::state::AppState;

/// Profile handler
pub async fn get_profile(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<UserProjection>, ApiError> {
    let user = get_user_by_id(&state.pool, user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Usuario no encontrado"))?;

    Ok(Json(user.into()))
}
