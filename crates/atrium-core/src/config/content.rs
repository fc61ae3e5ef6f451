//! Public content composition configuration.

use serde::{Deserialize, Serialize};

/// Settings for public-facing content composition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Base URL prepended to stored upload paths when building public URLs.
    #[serde(default = "default_public_base_url")]
    pub public_base_url: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            public_base_url: default_public_base_url(),
        }
    }
}

fn default_public_base_url() -> String {
    "http://localhost:9000".to_string()
}
