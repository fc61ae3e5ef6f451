//! Category and tag repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use atrium_core::error::{AppError, ErrorKind};
use atrium_core::result::AppResult;
use atrium_entity::taxonomy::{Category, CreateCategory, CreateTag, Tag};

/// Repository for categories and tags.
#[derive(Debug, Clone)]
pub struct TaxonomyRepository {
    pool: PgPool,
}

impl TaxonomyRepository {
    /// Create a new taxonomy repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // ── Categories ───────────────────────────────────────────

    /// Find a category by primary key.
    pub async fn find_category(&self, id: Uuid) -> AppResult<Option<Category>> {
        sqlx::query_as::<_, Category>("SELECT * FROM categories WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find category", e))
    }

    /// Find a category by slug.
    pub async fn find_category_by_slug(&self, slug: &str) -> AppResult<Option<Category>> {
        sqlx::query_as::<_, Category>("SELECT * FROM categories WHERE slug = $1")
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find category by slug", e)
            })
    }

    /// List every category.
    pub async fn find_all_categories(&self) -> AppResult<Vec<Category>> {
        sqlx::query_as::<_, Category>("SELECT * FROM categories ORDER BY name")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list categories", e))
    }

    /// Create a category.
    pub async fn create_category(&self, data: &CreateCategory) -> AppResult<Category> {
        sqlx::query_as::<_, Category>(
            "INSERT INTO categories (slug, name, parent_id) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(&data.slug)
        .bind(&data.name)
        .bind(data.parent_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create category", e))
    }

    /// Persist field changes to a category.
    pub async fn update_category(&self, category: &Category) -> AppResult<Category> {
        sqlx::query_as::<_, Category>(
            "UPDATE categories SET slug = $2, name = $3, parent_id = $4 WHERE id = $1 RETURNING *",
        )
        .bind(category.id)
        .bind(&category.slug)
        .bind(&category.name)
        .bind(category.parent_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update category", e))
    }

    /// Count the direct children of a category.
    pub async fn count_category_children(&self, id: Uuid) -> AppResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM categories WHERE parent_id = $1")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count child categories", e)
            })
    }

    /// Delete a category. Returns whether a row was removed.
    pub async fn delete_category(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete category", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    // ── Tags ─────────────────────────────────────────────────

    /// Find a tag by primary key.
    pub async fn find_tag(&self, id: Uuid) -> AppResult<Option<Tag>> {
        sqlx::query_as::<_, Tag>("SELECT * FROM tags WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find tag", e))
    }

    /// Find a tag by slug.
    pub async fn find_tag_by_slug(&self, slug: &str) -> AppResult<Option<Tag>> {
        sqlx::query_as::<_, Tag>("SELECT * FROM tags WHERE slug = $1")
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find tag by slug", e)
            })
    }

    /// List every tag.
    pub async fn find_all_tags(&self) -> AppResult<Vec<Tag>> {
        sqlx::query_as::<_, Tag>("SELECT * FROM tags ORDER BY name")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list tags", e))
    }

    /// Create a tag.
    pub async fn create_tag(&self, data: &CreateTag) -> AppResult<Tag> {
        sqlx::query_as::<_, Tag>("INSERT INTO tags (slug, name) VALUES ($1, $2) RETURNING *")
            .bind(&data.slug)
            .bind(&data.name)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create tag", e))
    }

    /// Delete a tag along with its post links. Returns whether the tag
    /// row was removed.
    pub async fn delete_tag(&self, id: Uuid) -> AppResult<bool> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        sqlx::query("DELETE FROM post_tags WHERE tag_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete tag links", e)
            })?;

        let result = sqlx::query("DELETE FROM tags WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete tag", e))?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit transaction", e)
        })?;

        Ok(result.rows_affected() > 0)
    }
}
