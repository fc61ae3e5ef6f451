//! Homepage quote model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A quote surfaced on the public landing page.
///
/// Only active quotes are composed, ordered by `display_order`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Quote {
    /// Unique quote identifier.
    pub id: Uuid,
    /// Quote text.
    pub text: String,
    /// Attribution.
    pub author: Option<String>,
    /// Explicit ordering on the page.
    pub display_order: i32,
    /// Whether the quote is currently shown.
    pub is_active: bool,
}
