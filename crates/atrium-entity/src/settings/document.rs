//! Typed, defaulting views over the loosely-shaped settings documents.
//!
//! Every field defaults so that a missing, null, or partially-formed
//! document deserializes into an empty-but-valid shape. Unknown fields are
//! ignored. Embedded upload references stay plain strings here; the
//! composer resolves anything UUID-shaped against the uploads table.

use serde::{Deserialize, Serialize};

/// The `home_page` settings document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HomePageDocument {
    /// Hero banners.
    pub banners: Vec<BannerItem>,
    /// Board member cards.
    pub board_members: Vec<PersonItem>,
    /// Partner logos.
    pub partners: Vec<PersonItem>,
    /// Event IDs to feature, resolved at read time.
    pub events: Vec<String>,
    /// Post IDs to feature as news, resolved at read time.
    pub news: Vec<String>,
}

impl HomePageDocument {
    /// Deserialize leniently: a null or malformed document becomes the
    /// empty default rather than an error.
    pub fn from_value(value: serde_json::Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }
}

/// A homepage banner entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BannerItem {
    /// Upload ID or literal URL of the banner image.
    pub image: Option<String>,
    /// Headline.
    pub title: Option<String>,
    /// Supporting line.
    pub subtitle: Option<String>,
    /// Click-through link.
    pub link: Option<String>,
    /// Explicit ordering; missing order falls back to index + 1.
    pub order: Option<i64>,
}

/// A board member or partner entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonItem {
    /// Upload ID or literal URL of the photo/logo.
    pub image: Option<String>,
    /// Display name.
    pub name: Option<String>,
    /// Role title or partner description.
    pub title: Option<String>,
    /// External link.
    pub link: Option<String>,
    /// Explicit ordering; missing order falls back to index + 1.
    pub order: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_malformed_document_defaults_to_empty() {
        let doc = HomePageDocument::from_value(json!(null));
        assert!(doc.banners.is_empty());
        assert!(doc.events.is_empty());

        let doc = HomePageDocument::from_value(json!({"banners": "not-an-array"}));
        assert!(doc.banners.is_empty());
    }

    #[test]
    fn test_partial_document_keeps_known_fields() {
        let doc = HomePageDocument::from_value(json!({
            "banners": [{"image": "abc", "title": "Hello"}],
            "unknown_field": 42
        }));
        assert_eq!(doc.banners.len(), 1);
        assert_eq!(doc.banners[0].title.as_deref(), Some("Hello"));
        assert!(doc.banners[0].order.is_none());
        assert!(doc.news.is_empty());
    }
}
