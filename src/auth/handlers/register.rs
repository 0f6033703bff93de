/**
 * Registration Handler
 *
 * Implements POST /auth/register.
 *
 * # Registration Process
 *
 * 1. Validate the body (nombre, email shape, password policy)
 * 2. Reject duplicate emails
 * 3. Hash the password with bcrypt
 * 4. Insert the user
 *
 * Registration does not log the user in; no tokens are issued here.
 */

use axum::{extract::State, http::StatusCode, response::Json};

use crate::auth::handlers::types::{MessageResponse, RegisterRequest};
use crate::auth::users::{create_user, get_user_by_email};
use crate::auth::validation::validate_register;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Registration handler
///
/// # Errors
///
/// * `400` - validation failure or duplicate email
/// * `500` - database or hashing failure
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    validate_register(&request)?;

    if get_user_by_email(&state.pool, &request.email).await?.is_some() {
        return Err(ApiError::validation("El email ya está en uso"));
    }

    let password_hash = bcrypt::hash(&request.password, bcrypt::DEFAULT_COST)?;

    let user = create_user(&state.pool, request.nombre, request.email, password_hash).await?;

    tracing::info!("User registered: {}", user.id);

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Usuario creado exitosamente".to_string(),
        }),
    ))
}
