//! Settings repository implementation.

use sqlx::PgPool;

use atrium_core::error::{AppError, ErrorKind};
use atrium_core::result::AppResult;
use atrium_entity::settings::Setting;

/// Repository for per-category settings documents.
#[derive(Debug, Clone)]
pub struct SettingsRepository {
    pool: PgPool,
}

impl SettingsRepository {
    /// Create a new settings repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List every settings row.
    pub async fn find_all(&self) -> AppResult<Vec<Setting>> {
        sqlx::query_as::<_, Setting>("SELECT * FROM settings ORDER BY category")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list settings", e))
    }

    /// Find the settings row for a category.
    pub async fn find_by_category(&self, category: &str) -> AppResult<Option<Setting>> {
        sqlx::query_as::<_, Setting>("SELECT * FROM settings WHERE category = $1")
            .bind(category)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find settings", e))
    }

    /// Replace (or create) a category's whole document.
    pub async fn upsert(&self, category: &str, document: &serde_json::Value) -> AppResult<Setting> {
        sqlx::query_as::<_, Setting>(
            "INSERT INTO settings (category, document) VALUES ($1, $2) \
             ON CONFLICT (category) DO UPDATE SET document = $2, updated_at = NOW() \
             RETURNING *",
        )
        .bind(category)
        .bind(document)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to upsert settings", e))
    }

    /// Set a single top-level key inside a category's document, creating
    /// the row if needed.
    pub async fn set_key(
        &self,
        category: &str,
        key: &str,
        value: &serde_json::Value,
    ) -> AppResult<Setting> {
        sqlx::query_as::<_, Setting>(
            "INSERT INTO settings (category, document) VALUES ($1, jsonb_build_object($2::text, $3::jsonb)) \
             ON CONFLICT (category) DO UPDATE \
             SET document = settings.document || jsonb_build_object($2::text, $3::jsonb), \
                 updated_at = NOW() \
             RETURNING *",
        )
        .bind(category)
        .bind(key)
        .bind(value)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to set settings key", e))
    }

    /// Remove a single top-level key from a category's document. Returns
    /// the updated row, or `None` if the category does not exist or its
    /// document has no such key.
    pub async fn delete_key(&self, category: &str, key: &str) -> AppResult<Option<Setting>> {
        sqlx::query_as::<_, Setting>(
            "UPDATE settings SET document = document - $2, updated_at = NOW() \
             WHERE category = $1 AND document ? $2 RETURNING *",
        )
        .bind(category)
        .bind(key)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to delete settings key", e)
        })
    }
}
