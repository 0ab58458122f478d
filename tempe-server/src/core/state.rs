use std::sync::Arc;

use sqlx::SqlitePool;
use tokio::sync::{Mutex, MutexGuard};

use crate::auth::{JwtService, password};
use crate::core::error::{Result, ServerError};
use crate::core::Config;
use crate::core::config::DEFAULT_ADMIN_PASSWORD;
use crate::db::DbService;
use crate::db::repository::user;

/// Shared server state, cheap to clone
///
/// | Field | Meaning |
/// |-------|---------|
/// | config | configuration (immutable) |
/// | pool | SQLite pool |
/// | jwt_service | token issue / validation |
/// | write_lock | serializes stock and payroll writes |
///
/// Every write that reads a balance before changing it (sales, returns,
/// production edits, expiry, payroll) holds `write_lock` for the
/// read-check-write sequence.
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub pool: SqlitePool,
    pub jwt_service: Arc<JwtService>,
    write_lock: Arc<Mutex<()>>,
}

impl ServerState {
    pub fn new(config: Config, db: DbService) -> Self {
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));
        Self {
            config,
            pool: db.pool,
            jwt_service,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Open the database, apply migrations and seed the admin login
    pub async fn initialize(config: &Config) -> Result<Self> {
        std::fs::create_dir_all(&config.work_dir).map_err(|source| ServerError::WorkDir {
            path: config.work_dir.clone(),
            source,
        })?;

        let db = DbService::new(&config.database_url).await?;
        let state = Self::new(config.clone(), db);
        state.seed_admin().await?;
        Ok(state)
    }

    /// State over a fresh in-memory database with [`Config::for_test`]
    pub async fn for_test() -> Result<Self> {
        let db = DbService::in_memory().await?;
        let state = Self::new(Config::for_test(), db);
        state.seed_admin().await?;
        Ok(state)
    }

    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Hold while checking stock or payroll state and writing the result
    pub async fn lock_writes(&self) -> MutexGuard<'_, ()> {
        self.write_lock.lock().await
    }

    async fn seed_admin(&self) -> Result<()> {
        let username = self.config.admin_username.trim();
        if username.is_empty() {
            return Ok(());
        }
        let existing = user::find_by_username(&self.pool, username)
            .await
            .map_err(|e| ServerError::Seed(e.to_string()))?;
        if existing.is_some() {
            return Ok(());
        }

        let hash = password::hash_password(&self.config.admin_password)
            .map_err(|e| ServerError::Seed(e.to_string()))?;
        user::create(&self.pool, username, &hash)
            .await
            .map_err(|e| ServerError::Seed(e.to_string()))?;
        if self.config.is_production() && self.config.admin_password == DEFAULT_ADMIN_PASSWORD {
            tracing::warn!(username = %username, "Admin seeded with the default password; change ADMIN_PASSWORD");
        }
        tracing::info!(username = %username, "Seeded admin user");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seeds_admin_once() {
        let state = ServerState::for_test().await.unwrap();
        state.seed_admin().await.unwrap();

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM app_user")
            .fetch_one(state.pool())
            .await
            .unwrap();
        assert_eq!(count, 1);

        let admin = user::find_by_username(state.pool(), "admin")
            .await
            .unwrap()
            .unwrap();
        assert!(password::verify_password("admin123", &admin.password_hash).unwrap());
    }
}
