/**
 * User Model and Database Operations
 *
 * This module handles user rows and the queries around them, including
 * the refresh-token column that backs session rotation and revocation.
 */

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

/// User row
///
/// `refresh_token` is nullable: `None` means no active session. At most
/// one value is stored at any time, so a fresh login elsewhere
/// invalidates the previous session's refresh token.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub nombre: String,
    pub email: String,
    /// Hashed password (bcrypt). Never serialized.
    pub password_hash: String,
    /// Currently valid refresh token, if a session is active
    pub refresh_token: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Public projection of a user
///
/// The only user shape that ever leaves the API. Password hash and
/// refresh token have no field here, so they cannot leak through
/// serialization.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProjection {
    pub id: Uuid,
    pub nombre: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserProjection {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            nombre: user.nombre,
            email: user.email,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

const USER_COLUMNS: &str =
    "id, nombre, email, password_hash, refresh_token, created_at, updated_at";

/// Create a new user
pub async fn create_user(
    pool: &PgPool,
    nombre: String,
    email: String,
    password_hash: String,
) -> Result<User, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, nombre, email, password_hash, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, nombre, email, password_hash, refresh_token, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(&nombre)
    .bind(&email)
    .bind(&password_hash)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Get user by email
pub async fn get_user_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(&format!(
        "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
    ))
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Get user by ID
pub async fn get_user_by_id(pool: &PgPool, id: Uuid) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(&format!(
        "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// List all users
pub async fn list_users(pool: &PgPool) -> Result<Vec<User>, sqlx::Error> {
    let users = sqlx::query_as::<_, User>(&format!(
        "SELECT {USER_COLUMNS} FROM users ORDER BY created_at"
    ))
    .fetch_all(pool)
    .await?;

    Ok(users)
}

/// Store a refresh token on a user row, replacing any prior value
///
/// This is the single-session invalidation point: a login overwrites
/// whatever refresh token an earlier session held.
pub async fn set_refresh_token(
    pool: &PgPool,
    user_id: Uuid,
    refresh_token: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE users SET refresh_token = $1, updated_at = $2 WHERE id = $3")
        .bind(refresh_token)
        .bind(Utc::now())
        .bind(user_id)
        .execute(pool)
        .await?;

    Ok(())
}

/// Rotate a refresh token with a compare-and-swap on the stored value
///
/// Returns `true` if the rotation won, `false` if the stored value no
/// longer matches `expected` (a concurrent refresh already rotated it,
/// or a logout/login replaced it). The WHERE clause makes the
/// read-modify-write a single atomic statement, so at most one of two
/// concurrent refreshes with the same token can succeed.
pub async fn rotate_refresh_token(
    pool: &PgPool,
    user_id: Uuid,
    expected: &str,
    replacement: &str,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE users
        SET refresh_token = $1, updated_at = $2
        WHERE id = $3 AND refresh_token = $4
        "#,
    )
    .bind(replacement)
    .bind(Utc::now())
    .bind(user_id)
    .bind(expected)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() == 1)
}

/// Clear a user's stored refresh token (logout)
pub async fn clear_refresh_token(pool: &PgPool, user_id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE users SET refresh_token = NULL, updated_at = $1 WHERE id = $2")
        .bind(Utc::now())
        .bind(user_id)
        .execute(pool)
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_user() -> User {
        User {
            id: Uuid::new_v4(),
            nombre: "Ana".to_string(),
            email: "a@x.com".to_string(),
            password_hash: "$2b$12$hash".to_string(),
            refresh_token: Some("some-token".to_string()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_projection_never_carries_secrets() {
        let user = sample_user();
        let projection = UserProjection::from(user.clone());

        let json = serde_json::to_value(&projection).unwrap();
        assert_eq!(json["nombre"], "Ana");
        assert_eq!(json["email"], "a@x.com");
        assert!(json.get("passwordHash").is_none());
        assert!(json.get("password_hash").is_none());
        assert!(json.get("refreshToken").is_none());
        assert!(json.get("refresh_token").is_none());
    }

    #[test]
    fn test_projection_uses_camel_case_timestamps() {
        let projection = UserProjection::from(sample_user());
        let json = serde_json::to_value(&projection).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
    }
}
