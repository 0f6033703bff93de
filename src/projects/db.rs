/**
 * Project Database Operations
 *
 * Owner-scoped queries for the projects table. Every read and update
 * filters by both the project ID and the requesting user's ID in a
 * single statement, so a project owned by another tenant is
 * indistinguishable from one that does not exist.
 */

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

/// Project row
///
/// `user_id` is set at creation and never updated afterwards; there is
/// no ownership-transfer operation.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

const PROJECT_COLUMNS: &str = "id, name, description, user_id, created_at, updated_at";

/// List the projects owned by a user
pub async fn list_projects(pool: &PgPool, owner_id: Uuid) -> Result<Vec<Project>, sqlx::Error> {
    let projects = sqlx::query_as::<_, Project>(&format!(
        "SELECT {PROJECT_COLUMNS} FROM projects WHERE user_id = $1 ORDER BY created_at"
    ))
    .bind(owner_id)
    .fetch_all(pool)
    .await?;

    Ok(projects)
}

/// Get a project by ID, scoped to its owner
pub async fn get_project(
    pool: &PgPool,
    id: Uuid,
    owner_id: Uuid,
) -> Result<Option<Project>, sqlx::Error> {
    let project = sqlx::query_as::<_, Project>(&format!(
        "SELECT {PROJECT_COLUMNS} FROM projects WHERE id = $1 AND user_id = $2"
    ))
    .bind(id)
    .bind(owner_id)
    .fetch_optional(pool)
    .await?;

    Ok(project)
}

/// Create a project owned by a user
pub async fn create_project(
    pool: &PgPool,
    owner_id: Uuid,
    name: String,
    description: Option<String>,
) -> Result<Project, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let project = sqlx::query_as::<_, Project>(
        r#"
        INSERT INTO projects (id, name, description, user_id, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, name, description, user_id, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(&name)
    .bind(&description)
    .bind(owner_id)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(project)
}

/// Partially update a project, scoped to its owner
///
/// Only fields carrying a value overwrite the stored row; `None` fields
/// keep their current values. Returns `None` when the project does not
/// exist for this owner (missing and foreign-owned look the same).
pub async fn update_project(
    pool: &PgPool,
    id: Uuid,
    owner_id: Uuid,
    name: Option<String>,
    description: Option<String>,
) -> Result<Option<Project>, sqlx::Error> {
    let now = Utc::now();

    let project = sqlx::query_as::<_, Project>(
        r#"
        UPDATE projects
        SET name = COALESCE($1, name),
            description = COALESCE($2, description),
            updated_at = $3
        WHERE id = $4 AND user_id = $5
        RETURNING id, name, description, user_id, created_at, updated_at
        "#,
    )
    .bind(&name)
    .bind(&description)
    .bind(now)
    .bind(id)
    .bind(owner_id)
    .fetch_optional(pool)
    .await?;

    Ok(project)
}
