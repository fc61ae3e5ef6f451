//! Homepage quote repository.

use sqlx::PgPool;

use atrium_core::error::{AppError, ErrorKind};
use atrium_core::result::AppResult;
use atrium_entity::quote::Quote;

/// Repository for homepage quotes.
#[derive(Debug, Clone)]
pub struct QuoteRepository {
    pool: PgPool,
}

impl QuoteRepository {
    /// Create a new quote repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List active quotes in display order.
    pub async fn find_active(&self) -> AppResult<Vec<Quote>> {
        sqlx::query_as::<_, Quote>(
            "SELECT * FROM quotes WHERE is_active = TRUE ORDER BY display_order",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list quotes", e))
    }
}
