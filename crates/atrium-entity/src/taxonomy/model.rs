//! Category and tag entity models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A hierarchical post category.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Category {
    /// Unique category identifier.
    pub id: Uuid,
    /// URL slug, unique across categories.
    pub slug: String,
    /// Display name.
    pub name: String,
    /// Parent category; a category may not be its own parent.
    pub parent_id: Option<Uuid>,
    /// When the category was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCategory {
    /// URL slug.
    pub slug: String,
    /// Display name.
    pub name: String,
    /// Parent category.
    pub parent_id: Option<Uuid>,
}

/// A flat post tag.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Tag {
    /// Unique tag identifier.
    pub id: Uuid,
    /// URL slug, unique across tags.
    pub slug: String,
    /// Display name.
    pub name: String,
    /// When the tag was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTag {
    /// URL slug.
    pub slug: String,
    /// Display name.
    pub name: String,
}
