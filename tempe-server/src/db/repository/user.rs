//! Login User Repository

use super::{RepoError, RepoResult};
use sqlx::SqlitePool;

/// Row of `app_user`; never serialized
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AppUser {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub created_at: i64,
}

pub async fn find_by_username(pool: &SqlitePool, username: &str) -> RepoResult<Option<AppUser>> {
    let row = sqlx::query_as::<_, AppUser>(
        "SELECT id, username, password_hash, created_at FROM app_user WHERE username = ?",
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn create(pool: &SqlitePool, username: &str, password_hash: &str) -> RepoResult<AppUser> {
    let id = shared::util::snowflake_id();
    let now = shared::util::now_millis();
    sqlx::query("INSERT INTO app_user (id, username, password_hash, created_at) VALUES (?, ?, ?, ?)")
        .bind(id)
        .bind(username)
        .bind(password_hash)
        .bind(now)
        .execute(pool)
        .await?;

    find_by_username(pool, username)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create user".into()))
}
