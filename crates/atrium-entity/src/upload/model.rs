//! Uploaded-object metadata model.
//!
//! Atrium stores only metadata; the bytes live in external object storage
//! and are addressed by `file_path`. Settings documents and posts reference
//! uploads by ID (plain strings in JSON, not foreign keys).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Metadata for an object held in external storage.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Upload {
    /// Unique upload identifier.
    pub id: Uuid,
    /// Original client file name.
    pub file_name: String,
    /// Name under which the object is stored.
    pub stored_name: String,
    /// Object key / path within the storage bucket.
    pub file_path: String,
    /// MIME type.
    pub mime_type: String,
    /// Coarse type bucket (`image`, `document`, ...).
    pub file_type: String,
    /// Whether the object is publicly addressable.
    pub is_public: bool,
    /// Object size in bytes.
    pub size_bytes: i64,
    /// Uploading user.
    pub created_by: Uuid,
    /// When the metadata row was created.
    pub created_at: DateTime<Utc>,
}

impl Upload {
    /// Build the fully-qualified public URL for this object.
    pub fn public_url(&self, base_url: &str) -> String {
        format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            self.file_path.trim_start_matches('/')
        )
    }
}

/// Data required to register uploaded-object metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUpload {
    /// Original client file name.
    pub file_name: String,
    /// Stored object name.
    pub stored_name: String,
    /// Object key / path.
    pub file_path: String,
    /// MIME type.
    pub mime_type: String,
    /// Coarse type bucket.
    pub file_type: String,
    /// Whether the object is publicly addressable.
    pub is_public: bool,
    /// Object size in bytes.
    pub size_bytes: i64,
    /// Uploading user.
    pub created_by: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_url_joins_cleanly() {
        let upload = Upload {
            id: Uuid::new_v4(),
            file_name: "banner.png".into(),
            stored_name: "abc123.png".into(),
            file_path: "/uploads/abc123.png".into(),
            mime_type: "image/png".into(),
            file_type: "image".into(),
            is_public: true,
            size_bytes: 1024,
            created_by: Uuid::new_v4(),
            created_at: Utc::now(),
        };
        assert_eq!(
            upload.public_url("http://localhost:9000/"),
            "http://localhost:9000/uploads/abc123.png"
        );
    }
}
