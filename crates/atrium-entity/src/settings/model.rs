//! Settings row model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One JSON document per category (`home_page`, `header`, `footer`, ...).
///
/// The document shape is contract-by-convention; readers deserialize into
/// typed structs with per-field defaulting rather than trusting the shape.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Setting {
    /// Unique row identifier.
    pub id: uuid::Uuid,
    /// Category name, unique.
    pub category: String,
    /// The opaque JSON document.
    pub document: serde_json::Value,
    /// When the document was last written.
    pub updated_at: DateTime<Utc>,
}
