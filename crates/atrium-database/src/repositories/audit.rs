//! Audit trail repository implementation.

use sqlx::PgPool;

use atrium_core::error::{AppError, ErrorKind};
use atrium_core::result::AppResult;
use atrium_entity::audit::{AuditEntry, CreateAuditEntry};

/// Repository for the append-only audit trail.
#[derive(Debug, Clone)]
pub struct AuditRepository {
    pool: PgPool,
}

impl AuditRepository {
    /// Create a new audit repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Append an audit entry.
    pub async fn record(&self, data: &CreateAuditEntry) -> AppResult<AuditEntry> {
        sqlx::query_as::<_, AuditEntry>(
            "INSERT INTO audit_entries (user_id, entity, entity_id, action, before_data, after_data) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
        )
        .bind(data.user_id)
        .bind(&data.entity)
        .bind(data.entity_id)
        .bind(&data.action)
        .bind(&data.before_data)
        .bind(&data.after_data)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to record audit entry", e))
    }
}
