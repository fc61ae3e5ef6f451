//! Event entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A calendar event surfaced on the public site.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Event {
    /// Unique event identifier.
    pub id: Uuid,
    /// URL slug, unique across events.
    pub slug: String,
    /// Title.
    pub title: String,
    /// Description.
    pub description: Option<String>,
    /// Start time.
    pub starts_at: DateTime<Utc>,
    /// End time (open-ended if absent).
    pub ends_at: Option<DateTime<Utc>>,
    /// Venue or address.
    pub location: Option<String>,
    /// Cover image upload reference.
    pub cover_upload_id: Option<Uuid>,
    /// Whether the event is publicly visible.
    pub is_published: bool,
    /// When the event was created.
    pub created_at: DateTime<Utc>,
    /// When the event was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create an event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEvent {
    /// URL slug.
    pub slug: String,
    /// Title.
    pub title: String,
    /// Description.
    pub description: Option<String>,
    /// Start time.
    pub starts_at: DateTime<Utc>,
    /// End time.
    pub ends_at: Option<DateTime<Utc>>,
    /// Venue or address.
    pub location: Option<String>,
    /// Cover image upload reference.
    pub cover_upload_id: Option<Uuid>,
    /// Whether the event is publicly visible.
    pub is_published: bool,
}
