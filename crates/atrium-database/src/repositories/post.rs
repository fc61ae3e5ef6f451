//! Post repository implementation.
//!
//! Multi-row writes (link rewrites, cascading delete) are grouped in a
//! single transaction so partial failure leaves no partial state.

use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use atrium_core::error::{AppError, ErrorKind};
use atrium_core::result::AppResult;
use atrium_core::types::pagination::{PageRequest, PageResponse};
use atrium_entity::post::{CreatePost, Post, PostStatus};

/// Repository for post CRUD, workflow persistence, and link management.
#[derive(Debug, Clone)]
pub struct PostRepository {
    pool: PgPool,
}

impl PostRepository {
    /// Create a new post repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a post by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Post>> {
        sqlx::query_as::<_, Post>("SELECT * FROM posts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find post", e))
    }

    /// Find a post by slug.
    pub async fn find_by_slug(&self, slug: &str) -> AppResult<Option<Post>> {
        sqlx::query_as::<_, Post>("SELECT * FROM posts WHERE slug = $1")
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find post by slug", e)
            })
    }

    /// Batch lookup of posts by ID, preserving only existing rows.
    pub async fn find_by_ids(&self, ids: &[Uuid]) -> AppResult<Vec<Post>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        sqlx::query_as::<_, Post>("SELECT * FROM posts WHERE id = ANY($1)")
            .bind(ids)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find posts", e))
    }

    /// List posts with pagination and an optional status filter.
    pub async fn find_all(
        &self,
        status: Option<PostStatus>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Post>> {
        let (total, posts) = match status {
            Some(status) => {
                let total: i64 =
                    sqlx::query_scalar("SELECT COUNT(*) FROM posts WHERE status = $1")
                        .bind(status)
                        .fetch_one(&self.pool)
                        .await
                        .map_err(|e| {
                            AppError::with_source(ErrorKind::Database, "Failed to count posts", e)
                        })?;
                let posts = sqlx::query_as::<_, Post>(
                    "SELECT * FROM posts WHERE status = $1 ORDER BY created_at DESC \
                     LIMIT $2 OFFSET $3",
                )
                .bind(status)
                .bind(page.limit() as i64)
                .bind(page.offset() as i64)
                .fetch_all(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to list posts", e)
                })?;
                (total, posts)
            }
            None => {
                let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM posts")
                    .fetch_one(&self.pool)
                    .await
                    .map_err(|e| {
                        AppError::with_source(ErrorKind::Database, "Failed to count posts", e)
                    })?;
                let posts = sqlx::query_as::<_, Post>(
                    "SELECT * FROM posts ORDER BY created_at DESC LIMIT $1 OFFSET $2",
                )
                .bind(page.limit() as i64)
                .bind(page.offset() as i64)
                .fetch_all(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to list posts", e)
                })?;
                (total, posts)
            }
        };

        Ok(PageResponse::new(
            posts,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Create a post as a draft and attach its category/tag links, all in
    /// one transaction.
    pub async fn create(&self, data: &CreatePost) -> AppResult<Post> {
        let mut tx = self.begin().await?;

        let post = sqlx::query_as::<_, Post>(
            "INSERT INTO posts (slug, title, excerpt, body, status, created_by, updated_by) \
             VALUES ($1, $2, $3, $4, 'draft', $5, $5) RETURNING *",
        )
        .bind(&data.slug)
        .bind(&data.title)
        .bind(&data.excerpt)
        .bind(&data.body)
        .bind(data.created_by)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create post", e))?;

        Self::replace_links(&mut tx, post.id, "post_categories", "category_id", &data.category_ids)
            .await?;
        Self::replace_links(&mut tx, post.id, "post_tags", "tag_id", &data.tag_ids).await?;

        self.commit(tx).await?;
        Ok(post)
    }

    /// Persist field changes to a post, optionally rewriting its links in
    /// the same transaction.
    pub async fn update(
        &self,
        post: &Post,
        category_ids: Option<&[Uuid]>,
        tag_ids: Option<&[Uuid]>,
    ) -> AppResult<Post> {
        let mut tx = self.begin().await?;

        let updated = sqlx::query_as::<_, Post>(
            "UPDATE posts SET slug = $2, title = $3, excerpt = $4, body = $5, status = $6, \
             published_at = $7, updated_by = $8, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(post.id)
        .bind(&post.slug)
        .bind(&post.title)
        .bind(&post.excerpt)
        .bind(&post.body)
        .bind(post.status)
        .bind(post.published_at)
        .bind(post.updated_by)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update post", e))?;

        if let Some(ids) = category_ids {
            Self::replace_links(&mut tx, post.id, "post_categories", "category_id", ids).await?;
        }
        if let Some(ids) = tag_ids {
            Self::replace_links(&mut tx, post.id, "post_tags", "tag_id", ids).await?;
        }

        self.commit(tx).await?;
        Ok(updated)
    }

    /// Persist a workflow status change.
    pub async fn set_status(
        &self,
        post_id: Uuid,
        status: PostStatus,
        published_at: Option<DateTime<Utc>>,
        updated_by: Uuid,
    ) -> AppResult<Post> {
        sqlx::query_as::<_, Post>(
            "UPDATE posts SET status = $2, published_at = COALESCE($3, published_at), \
             updated_by = $4, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(post_id)
        .bind(status)
        .bind(published_at)
        .bind(updated_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to set post status", e))
    }

    /// Delete a post and everything hanging off it: analytics rollups,
    /// asset-usage rows, both join tables, then the post row. All five
    /// steps commit together or not at all.
    pub async fn delete(&self, post_id: Uuid) -> AppResult<()> {
        let mut tx = self.begin().await?;

        sqlx::query("DELETE FROM analytics_views WHERE entity = 'post' AND entity_id = $1")
            .bind(post_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete post analytics", e)
            })?;

        sqlx::query("DELETE FROM asset_usages WHERE entity = 'post' AND entity_id = $1")
            .bind(post_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete post asset usage", e)
            })?;

        sqlx::query("DELETE FROM post_categories WHERE post_id = $1")
            .bind(post_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete post categories", e)
            })?;

        sqlx::query("DELETE FROM post_tags WHERE post_id = $1")
            .bind(post_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete post tags", e)
            })?;

        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(post_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete post", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Post {post_id} not found")));
        }

        self.commit(tx).await?;
        Ok(())
    }

    /// List the category IDs linked to a post.
    pub async fn find_category_ids(&self, post_id: Uuid) -> AppResult<Vec<Uuid>> {
        sqlx::query_scalar::<_, Uuid>(
            "SELECT category_id FROM post_categories WHERE post_id = $1",
        )
        .bind(post_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to load post categories", e)
        })
    }

    /// List the tag IDs linked to a post.
    pub async fn find_tag_ids(&self, post_id: Uuid) -> AppResult<Vec<Uuid>> {
        sqlx::query_scalar::<_, Uuid>("SELECT tag_id FROM post_tags WHERE post_id = $1")
            .bind(post_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load post tags", e))
    }

    /// Count posts linked to a category. Used to guard category deletion.
    pub async fn count_by_category(&self, category_id: Uuid) -> AppResult<i64> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM post_categories WHERE category_id = $1",
        )
        .bind(category_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count category posts", e)
        })
    }

    async fn begin(&self) -> AppResult<Transaction<'static, Postgres>> {
        self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })
    }

    async fn commit(&self, tx: Transaction<'static, Postgres>) -> AppResult<()> {
        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit transaction", e)
        })
    }

    /// Rewrite a post's join rows inside the caller's transaction.
    async fn replace_links(
        tx: &mut Transaction<'static, Postgres>,
        post_id: Uuid,
        table: &str,
        column: &str,
        ids: &[Uuid],
    ) -> AppResult<()> {
        sqlx::query(&format!("DELETE FROM {table} WHERE post_id = $1"))
            .bind(post_id)
            .execute(&mut **tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to clear post links", e)
            })?;

        for id in ids {
            sqlx::query(&format!(
                "INSERT INTO {table} (post_id, {column}) VALUES ($1, $2) ON CONFLICT DO NOTHING"
            ))
            .bind(post_id)
            .bind(id)
            .execute(&mut **tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to insert post link", e)
            })?;
        }
        Ok(())
    }
}
