//! Session entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A login session.
///
/// Sessions are created on login and destroyed logically by flipping
/// `is_active` to false (logout, inactivity timeout, or a newer login);
/// rows are never physically deleted.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Session {
    /// Unique session identifier.
    pub id: Uuid,
    /// The user this session belongs to.
    pub user_id: Uuid,
    /// SHA-256 hash of the bearer token bound to this session.
    #[serde(skip_serializing)]
    pub token_hash: String,
    /// Whether the session is still live.
    pub is_active: bool,
    /// Absolute expiry regardless of activity.
    pub expires_at: DateTime<Utc>,
    /// Last request timestamp; drives the sliding inactivity window.
    pub last_access_at: DateTime<Utc>,
    /// IP address from which the session was created.
    pub ip_address: Option<String>,
    /// User-Agent header value.
    pub user_agent: Option<String>,
    /// When the session was created (login time).
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new session.
///
/// The ID is minted by the caller so the bearer token (which embeds the
/// session ID) can be issued before the row exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSession {
    /// Pre-generated session identifier.
    pub id: Uuid,
    /// The user this session belongs to.
    pub user_id: Uuid,
    /// SHA-256 hash of the bearer token.
    pub token_hash: String,
    /// Absolute expiry.
    pub expires_at: DateTime<Utc>,
    /// Client IP address.
    pub ip_address: Option<String>,
    /// User-Agent header.
    pub user_agent: Option<String>,
}
