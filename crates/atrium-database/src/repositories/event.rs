//! Event repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use atrium_core::error::{AppError, ErrorKind};
use atrium_core::result::AppResult;
use atrium_core::types::pagination::{PageRequest, PageResponse};
use atrium_entity::event::{CreateEvent, Event};

/// Repository for event CRUD and query operations.
#[derive(Debug, Clone)]
pub struct EventRepository {
    pool: PgPool,
}

impl EventRepository {
    /// Create a new event repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an event by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Event>> {
        sqlx::query_as::<_, Event>("SELECT * FROM events WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find event", e))
    }

    /// Find an event by slug.
    pub async fn find_by_slug(&self, slug: &str) -> AppResult<Option<Event>> {
        sqlx::query_as::<_, Event>("SELECT * FROM events WHERE slug = $1")
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find event by slug", e)
            })
    }

    /// Batch lookup of events by ID.
    pub async fn find_by_ids(&self, ids: &[Uuid]) -> AppResult<Vec<Event>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        sqlx::query_as::<_, Event>("SELECT * FROM events WHERE id = ANY($1)")
            .bind(ids)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find events", e))
    }

    /// List events with pagination, upcoming first.
    pub async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<Event>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM events")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count events", e))?;

        let events = sqlx::query_as::<_, Event>(
            "SELECT * FROM events ORDER BY starts_at DESC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list events", e))?;

        Ok(PageResponse::new(
            events,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Create a new event.
    pub async fn create(&self, data: &CreateEvent) -> AppResult<Event> {
        sqlx::query_as::<_, Event>(
            "INSERT INTO events (slug, title, description, starts_at, ends_at, location, \
             cover_upload_id, is_published) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING *",
        )
        .bind(&data.slug)
        .bind(&data.title)
        .bind(&data.description)
        .bind(data.starts_at)
        .bind(data.ends_at)
        .bind(&data.location)
        .bind(data.cover_upload_id)
        .bind(data.is_published)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create event", e))
    }

    /// Persist field changes to an event.
    pub async fn update(&self, event: &Event) -> AppResult<Event> {
        sqlx::query_as::<_, Event>(
            "UPDATE events SET slug = $2, title = $3, description = $4, starts_at = $5, \
             ends_at = $6, location = $7, cover_upload_id = $8, is_published = $9, \
             updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(event.id)
        .bind(&event.slug)
        .bind(&event.title)
        .bind(&event.description)
        .bind(event.starts_at)
        .bind(event.ends_at)
        .bind(&event.location)
        .bind(event.cover_upload_id)
        .bind(event.is_published)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update event", e))
    }

    /// Delete an event. Returns whether a row was removed.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete event", e))?;
        Ok(result.rows_affected() > 0)
    }
}
