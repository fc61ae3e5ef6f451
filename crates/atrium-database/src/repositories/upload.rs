//! Upload metadata repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use atrium_core::error::{AppError, ErrorKind};
use atrium_core::result::AppResult;
use atrium_core::types::pagination::{PageRequest, PageResponse};
use atrium_entity::upload::{CreateUpload, Upload};

/// Repository for uploaded-object metadata.
#[derive(Debug, Clone)]
pub struct UploadRepository {
    pool: PgPool,
}

impl UploadRepository {
    /// Create a new upload repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an upload by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Upload>> {
        sqlx::query_as::<_, Upload>("SELECT * FROM uploads WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find upload", e))
    }

    /// Batch lookup by ID. Missing IDs are silently absent from the result.
    pub async fn find_by_ids(&self, ids: &[Uuid]) -> AppResult<Vec<Upload>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        sqlx::query_as::<_, Upload>("SELECT * FROM uploads WHERE id = ANY($1)")
            .bind(ids)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find uploads", e))
    }

    /// List uploads with pagination.
    pub async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<Upload>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM uploads")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count uploads", e)
            })?;

        let uploads = sqlx::query_as::<_, Upload>(
            "SELECT * FROM uploads ORDER BY created_at DESC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list uploads", e))?;

        Ok(PageResponse::new(
            uploads,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Register new upload metadata.
    pub async fn create(&self, data: &CreateUpload) -> AppResult<Upload> {
        sqlx::query_as::<_, Upload>(
            "INSERT INTO uploads (file_name, stored_name, file_path, mime_type, file_type, \
             is_public, size_bytes, created_by) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING *",
        )
        .bind(&data.file_name)
        .bind(&data.stored_name)
        .bind(&data.file_path)
        .bind(&data.mime_type)
        .bind(&data.file_type)
        .bind(data.is_public)
        .bind(data.size_bytes)
        .bind(data.created_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create upload", e))
    }

    /// Delete upload metadata. Returns whether a row was removed.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM uploads WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete upload", e))?;
        Ok(result.rows_affected() > 0)
    }
}
