//! Post entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::PostStatus;

/// A content post.
///
/// Category and tag links live in the `post_categories` / `post_tags`
/// join tables and are loaded separately.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Post {
    /// Unique post identifier.
    pub id: Uuid,
    /// URL slug, unique across all posts.
    pub slug: String,
    /// Title.
    pub title: String,
    /// Short summary shown in listings.
    pub excerpt: Option<String>,
    /// Full body (markdown or HTML, opaque to the backend).
    pub body: String,
    /// Current workflow status.
    pub status: PostStatus,
    /// Set only when the post transitions into `published`.
    pub published_at: Option<DateTime<Utc>>,
    /// The author.
    pub created_by: Uuid,
    /// Last user to modify the post.
    pub updated_by: Uuid,
    /// When the post was created.
    pub created_at: DateTime<Utc>,
    /// When the post was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new post. Always created as a draft.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePost {
    /// URL slug.
    pub slug: String,
    /// Title.
    pub title: String,
    /// Short summary.
    pub excerpt: Option<String>,
    /// Full body.
    pub body: String,
    /// The acting author.
    pub created_by: Uuid,
    /// Linked category IDs.
    pub category_ids: Vec<Uuid>,
    /// Linked tag IDs.
    pub tag_ids: Vec<Uuid>,
}

/// Data for updating an existing post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePost {
    /// New slug.
    pub slug: Option<String>,
    /// New title.
    pub title: Option<String>,
    /// New excerpt.
    pub excerpt: Option<String>,
    /// New body.
    pub body: Option<String>,
    /// New status. `published_at` is stamped only when this newly becomes
    /// `published` relative to the stored status.
    pub status: Option<PostStatus>,
    /// Replacement category links (omit to leave unchanged).
    pub category_ids: Option<Vec<Uuid>>,
    /// Replacement tag links (omit to leave unchanged).
    pub tag_ids: Option<Vec<Uuid>>,
}
