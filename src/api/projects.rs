/**
 * Project API Handlers
 *
 * Owner-scoped project CRUD behind the Access Guard. Every handler
 * takes the authenticated user from `AuthUser` and scopes its query by
 * that ID; a project belonging to someone else answers 404, never 403,
 * so resource existence never leaks across tenants.
 */

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::users::get_user_by_id;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::projects::db::{create_project, get_project, list_projects, update_project, Project};
use crate::server::state::AppState;

/// Body for POST /projects
#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    pub name: String,
    pub description: Option<String>,
}

/// Body for PATCH /projects/{id}
///
/// Absent fields leave the stored values untouched.
#[derive(Debug, Deserialize, Default)]
pub struct UpdateProjectRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// GET /projects - list the authenticated user's projects
pub async fn get_projects(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<Project>>, ApiError> {
    let projects = list_projects(&state.pool, user_id).await?;
    Ok(Json(projects))
}

/// GET /projects/{id}
pub async fn get_project_by_id(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Project>, ApiError> {
    let project = get_project(&state.pool, id, user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Proyecto no encontrado"))?;

    Ok(Json(project))
}

/// POST /projects
pub async fn post_project(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(request): Json<CreateProjectRequest>,
) -> Result<(StatusCode, Json<Project>), ApiError> {
    if request.name.trim().is_empty() {
        return Err(ApiError::validation("El nombre del proyecto es requerido"));
    }

    // The access check is stateless, so the owner row may have vanished
    // since the token was issued.
    if get_user_by_id(&state.pool, user_id).await?.is_none() {
        return Err(ApiError::not_found("Usuario no encontrado"));
    }

    let project = create_project(&state.pool, user_id, request.name, request.description).await?;

    tracing::info!("Project created: {} (owner {})", project.id, user_id);

    Ok((StatusCode::CREATED, Json(project)))
}

/// PATCH /projects/{id} - partial-field merge
pub async fn patch_project(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateProjectRequest>,
) -> Result<Json<Project>, ApiError> {
    if let Some(name) = &request.name {
        if name.trim().is_empty() {
            return Err(ApiError::validation("El nombre del proyecto es requerido"));
        }
    }

    let project = update_project(&state.pool, id, user_id, request.name, request.description)
        .await?
        .ok_or_else(|| ApiError::not_found("Proyecto no encontrado"))?;

    Ok(Json(project))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_patch_body_absent_fields_stay_none() {
        let request: UpdateProjectRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.name, None);
        assert_eq!(request.description, None);
    }

    #[test]
    fn test_patch_body_partial() {
        let request: UpdateProjectRequest =
            serde_json::from_str(r#"{"name":"Nuevo nombre"}"#).unwrap();
        assert_eq!(request.name.as_deref(), Some("Nuevo nombre"));
        assert_eq!(request.description, None);
    }

    #[test]
    fn test_create_body_description_optional() {
        let request: CreateProjectRequest =
            serde_json::from_str(r#"{"name":"Sitio web"}"#).unwrap();
        assert_eq!(request.name, "Sitio web");
        assert_eq!(request.description, None);
    }
}
