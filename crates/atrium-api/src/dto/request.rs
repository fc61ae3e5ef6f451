//! Request DTOs with validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Login email.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Password change request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ChangePasswordRequest {
    /// Current password.
    #[validate(length(min = 1))]
    pub current_password: String,
    /// New password. The full complexity policy runs in the service; this
    /// only rejects the obviously empty case early.
    #[validate(length(min = 8))]
    pub new_password: String,
}

/// Create user request (admin).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserBody {
    /// Login email.
    #[validate(email)]
    pub email: String,
    /// Display name.
    #[validate(length(min = 1, max = 255))]
    pub full_name: String,
    /// Initial password; omitted means a temporary one is generated.
    pub password: Option<String>,
}

/// Update user request (admin).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUserBody {
    /// New email.
    pub email: Option<String>,
    /// New display name.
    pub full_name: Option<String>,
}

/// Create post request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePostBody {
    /// URL slug.
    #[validate(length(min = 1, max = 255))]
    pub slug: String,
    /// Title.
    #[validate(length(min = 1, max = 500))]
    pub title: String,
    /// Short summary.
    pub excerpt: Option<String>,
    /// Full body.
    pub body: String,
    /// Linked category IDs.
    #[serde(default)]
    pub category_ids: Vec<Uuid>,
    /// Linked tag IDs.
    #[serde(default)]
    pub tag_ids: Vec<Uuid>,
}

/// Update post request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePostBody {
    /// New slug.
    pub slug: Option<String>,
    /// New title.
    pub title: Option<String>,
    /// New excerpt.
    pub excerpt: Option<String>,
    /// New body.
    pub body: Option<String>,
    /// New status (named, not a transition; workflow routes handle those).
    pub status: Option<String>,
    /// Replacement category links.
    pub category_ids: Option<Vec<Uuid>>,
    /// Replacement tag links.
    pub tag_ids: Option<Vec<Uuid>>,
}

/// Body for the reject workflow route.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RejectBody {
    /// Optional reason recorded in the audit trail.
    pub reason: Option<String>,
}

/// Create category request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCategoryBody {
    /// URL slug.
    #[validate(length(min = 1, max = 255))]
    pub slug: String,
    /// Display name.
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    /// Optional parent category.
    pub parent_id: Option<Uuid>,
}

/// Create tag request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateTagBody {
    /// URL slug.
    #[validate(length(min = 1, max = 255))]
    pub slug: String,
    /// Display name.
    #[validate(length(min = 1, max = 255))]
    pub name: String,
}

/// Create event request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateEventBody {
    /// URL slug.
    #[validate(length(min = 1, max = 255))]
    pub slug: String,
    /// Title.
    #[validate(length(min = 1, max = 500))]
    pub title: String,
    /// Description.
    pub description: Option<String>,
    /// Start time.
    pub starts_at: DateTime<Utc>,
    /// End time.
    pub ends_at: Option<DateTime<Utc>>,
    /// Venue.
    pub location: Option<String>,
    /// Cover image upload reference.
    pub cover_upload_id: Option<Uuid>,
    /// Whether the event is publicly visible.
    #[serde(default)]
    pub is_published: bool,
}

/// Body for setting a single settings key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetSettingKeyBody {
    /// The value to store under the key.
    pub value: serde_json::Value,
}
