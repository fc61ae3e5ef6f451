//! Sliding-timeout session validation.

use chrono::{DateTime, Duration, Utc};
use tracing::debug;
use uuid::Uuid;

use atrium_core::config::SessionConfig;
use atrium_core::error::AppError;
use atrium_core::result::AppResult;
use atrium_database::repositories::session::SessionRepository;
use atrium_entity::session::Session;

/// Validates that a live session backs an authenticated request and
/// enforces the sliding inactivity timeout.
#[derive(Debug, Clone)]
pub struct SessionGuard {
    sessions: SessionRepository,
    idle_timeout_minutes: i64,
}

impl SessionGuard {
    /// Create a guard over the session repository.
    pub fn new(sessions: SessionRepository, config: &SessionConfig) -> Self {
        Self {
            sessions,
            idle_timeout_minutes: config.idle_timeout_minutes,
        }
    }

    /// Confirm a live session exists for the user and renew it.
    ///
    /// Looks up the most recent active, non-expired session, stamps
    /// `last_access_at`, then checks the inactivity window against the
    /// value captured *before* the stamp. An idle session is deactivated
    /// and rejected with a timeout-specific message.
    pub async fn validate(&self, user_id: Uuid) -> AppResult<Session> {
        let session = self
            .sessions
            .find_latest_active(user_id)
            .await?
            .ok_or_else(|| AppError::unauthorized("No active session found"))?;

        // The touch below overwrites last_access_at, so the idle check
        // must run against the value read at lookup time.
        let previous_access = session.last_access_at;
        self.sessions.touch(session.id).await?;

        if is_idle_expired(previous_access, Utc::now(), self.idle_timeout_minutes) {
            debug!(
                session_id = %session.id,
                user_id = %user_id,
                idle_minutes = self.idle_timeout_minutes,
                "session exceeded inactivity window"
            );
            self.sessions.deactivate(session.id).await?;
            return Err(AppError::unauthorized(
                "Session expired due to inactivity, please log in again",
            ));
        }

        Ok(session)
    }
}

/// Whether the elapsed time since `last_access_at` exceeds the idle window.
pub fn is_idle_expired(
    last_access_at: DateTime<Utc>,
    now: DateTime<Utc>,
    idle_timeout_minutes: i64,
) -> bool {
    now - last_access_at > Duration::minutes(idle_timeout_minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recent_access_is_within_window() {
        let now = Utc::now();
        assert!(!is_idle_expired(now - Duration::minutes(29), now, 30));
        assert!(!is_idle_expired(now, now, 30));
    }

    #[test]
    fn test_stale_access_exceeds_window() {
        let now = Utc::now();
        assert!(is_idle_expired(now - Duration::minutes(31), now, 30));
        assert!(is_idle_expired(now - Duration::hours(5), now, 30));
    }

    #[test]
    fn test_boundary_is_not_expired() {
        // Exactly at the threshold still passes; only strictly-greater
        // elapsed time rejects.
        let now = Utc::now();
        assert!(!is_idle_expired(now - Duration::minutes(30), now, 30));
    }
}
