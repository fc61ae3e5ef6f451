//! Daily view-count rollup repository.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use atrium_core::error::{AppError, ErrorKind};
use atrium_core::result::AppResult;

/// Repository for the `(entity, entity_id, date)` view rollup.
#[derive(Debug, Clone)]
pub struct AnalyticsRepository {
    pool: PgPool,
}

impl AnalyticsRepository {
    /// Create a new analytics repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Record one view against today's bucket for the entity.
    ///
    /// A single upsert gives find-or-create-then-increment semantics; the
    /// unique index on the triple keeps concurrent increments correct.
    pub async fn increment_daily(
        &self,
        entity: &str,
        entity_id: Uuid,
        date: DateTime<Utc>,
    ) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO analytics_views (entity, entity_id, date, views) VALUES ($1, $2, $3, 1) \
             ON CONFLICT (entity, entity_id, date) DO UPDATE SET views = analytics_views.views + 1",
        )
        .bind(entity)
        .bind(entity_id)
        .bind(truncate_to_midnight(date))
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to record view", e))?;
        Ok(())
    }
}

/// Truncate a timestamp to midnight UTC, the rollup's day key.
fn truncate_to_midnight(ts: DateTime<Utc>) -> DateTime<Utc> {
    ts.date_naive().and_time(chrono::NaiveTime::MIN).and_utc()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_truncate_to_midnight() {
        let ts = Utc.with_ymd_and_hms(2026, 3, 14, 15, 9, 26).unwrap();
        let midnight = truncate_to_midnight(ts);
        assert_eq!(midnight, Utc.with_ymd_and_hms(2026, 3, 14, 0, 0, 0).unwrap());
    }
}
