/**
 * User API Handlers
 *
 * Read-only user endpoints behind the Access Guard. Both return the
 * public projection only - password hashes and refresh tokens have no
 * field in the serialized shape.
 */

use axum::{
    extract::{Path, State},
    response::Json,
};
use uuid::Uuid;

use crate::auth::users::{get_user_by_id, list_users, UserProjection};
use crate::error::ApiError;
use crate::server::state::AppState;

/// GET /users - list all user projections
pub async fn get_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserProjection>>, ApiError> {
    let users = list_users(&state.pool).await?;
    Ok(Json(users.into_iter().map(Into::into).collect()))
}

/// GET /users/{id} - single user projection
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<UserProjection>, ApiError> {
    let user = get_user_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Usuario no encontrado"))?;

    Ok(Json(user.into()))
}
