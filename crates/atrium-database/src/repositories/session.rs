//! Session repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use atrium_core::error::{AppError, ErrorKind};
use atrium_core::result::AppResult;
use atrium_entity::session::{CreateSession, Session};

/// Repository for session lifecycle operations.
///
/// Sessions are never deleted; deactivation flips `is_active` to false.
#[derive(Debug, Clone)]
pub struct SessionRepository {
    pool: PgPool,
}

impl SessionRepository {
    /// Create a new session repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find the most recent live session for a user.
    pub async fn find_latest_active(&self, user_id: Uuid) -> AppResult<Option<Session>> {
        sqlx::query_as::<_, Session>(
            "SELECT * FROM sessions WHERE user_id = $1 AND is_active = TRUE AND expires_at > NOW() \
             ORDER BY created_at DESC LIMIT 1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find active session", e))
    }

    /// Create a new session.
    pub async fn create(&self, data: &CreateSession) -> AppResult<Session> {
        sqlx::query_as::<_, Session>(
            "INSERT INTO sessions (id, user_id, token_hash, expires_at, ip_address, user_agent) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
        )
        .bind(data.id)
        .bind(data.user_id)
        .bind(&data.token_hash)
        .bind(data.expires_at)
        .bind(&data.ip_address)
        .bind(&data.user_agent)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create session", e))
    }

    /// Stamp `last_access_at` with the current time.
    pub async fn touch(&self, session_id: Uuid) -> AppResult<()> {
        sqlx::query("UPDATE sessions SET last_access_at = NOW() WHERE id = $1")
            .bind(session_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to update last access", e)
            })?;
        Ok(())
    }

    /// Deactivate a single session.
    pub async fn deactivate(&self, session_id: Uuid) -> AppResult<()> {
        sqlx::query("UPDATE sessions SET is_active = FALSE WHERE id = $1")
            .bind(session_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to deactivate session", e)
            })?;
        Ok(())
    }

    /// Deactivate every active session for a user. Returns how many were
    /// flipped. Called on login so a new session supersedes prior ones.
    pub async fn deactivate_all_for_user(&self, user_id: Uuid) -> AppResult<u64> {
        let result =
            sqlx::query("UPDATE sessions SET is_active = FALSE WHERE user_id = $1 AND is_active = TRUE")
                .bind(user_id)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to deactivate user sessions", e)
                })?;
        Ok(result.rows_affected())
    }
}
