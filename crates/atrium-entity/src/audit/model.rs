//! Audit trail entry model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An append-only record of who changed what.
///
/// Coverage is currently partial: workflow rejection records an entry
/// (carrying the reviewer's reason), other transitions do not.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AuditEntry {
    /// Unique entry identifier.
    pub id: Uuid,
    /// The acting user.
    pub user_id: Uuid,
    /// Entity kind (e.g. `post`).
    pub entity: String,
    /// Entity identifier.
    pub entity_id: Uuid,
    /// Action performed (e.g. `reject`).
    pub action: String,
    /// Entity state before the change.
    pub before_data: Option<serde_json::Value>,
    /// Entity state (or context, such as a rejection reason) after.
    pub after_data: Option<serde_json::Value>,
    /// When the entry was recorded.
    pub created_at: DateTime<Utc>,
}

/// Data required to append an audit entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAuditEntry {
    /// The acting user.
    pub user_id: Uuid,
    /// Entity kind.
    pub entity: String,
    /// Entity identifier.
    pub entity_id: Uuid,
    /// Action performed.
    pub action: String,
    /// State before the change.
    pub before_data: Option<serde_json::Value>,
    /// State or context after the change.
    pub after_data: Option<serde_json::Value>,
}
