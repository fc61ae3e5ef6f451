//! Administrative CRUD over per-category settings documents.

use std::sync::Arc;

use tracing::info;

use atrium_core::error::AppError;
use atrium_core::result::AppResult;
use atrium_database::repositories::settings::SettingsRepository;
use atrium_entity::settings::Setting;

use crate::context::RequestContext;

/// Manages the raw settings documents. Admin-facing reads return 404 for
/// a missing category; public fallback behavior lives in the composer.
#[derive(Debug, Clone)]
pub struct SettingsService {
    settings_repo: Arc<SettingsRepository>,
}

impl SettingsService {
    /// Creates a new settings service.
    pub fn new(settings_repo: Arc<SettingsRepository>) -> Self {
        Self { settings_repo }
    }

    /// Lists every settings row.
    pub async fn list(&self) -> AppResult<Vec<Setting>> {
        self.settings_repo.find_all().await
    }

    /// Gets the document for a category.
    pub async fn get(&self, category: &str) -> AppResult<Setting> {
        self.settings_repo
            .find_by_category(category)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Settings category '{category}' not found")))
    }

    /// Replaces (or creates) a category's whole document.
    pub async fn upsert(
        &self,
        ctx: &RequestContext,
        category: &str,
        document: serde_json::Value,
    ) -> AppResult<Setting> {
        let setting = self.settings_repo.upsert(category, &document).await?;
        info!(user_id = %ctx.user_id, category = %category, "Settings document replaced");
        Ok(setting)
    }

    /// Sets a single top-level key inside a category's document.
    pub async fn set_key(
        &self,
        ctx: &RequestContext,
        category: &str,
        key: &str,
        value: serde_json::Value,
    ) -> AppResult<Setting> {
        let setting = self.settings_repo.set_key(category, key, &value).await?;
        info!(user_id = %ctx.user_id, category = %category, key = %key, "Settings key set");
        Ok(setting)
    }

    /// Removes a single top-level key from a category's document.
    /// NotFound covers both a missing category and a missing key.
    pub async fn delete_key(
        &self,
        ctx: &RequestContext,
        category: &str,
        key: &str,
    ) -> AppResult<Setting> {
        let setting = self
            .settings_repo
            .delete_key(category, key)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!(
                    "Settings category '{category}' has no key '{key}'"
                ))
            })?;
        info!(user_id = %ctx.user_id, category = %category, key = %key, "Settings key removed");
        Ok(setting)
    }
}
