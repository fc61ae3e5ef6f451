//! Upload metadata registration and lookup.
//!
//! Only metadata lives here; the object bytes are managed by external
//! storage and addressed through `file_path`.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use atrium_core::config::ContentConfig;
use atrium_core::error::AppError;
use atrium_core::result::AppResult;
use atrium_core::types::pagination::{PageRequest, PageResponse};
use atrium_database::repositories::upload::UploadRepository;
use atrium_entity::upload::{CreateUpload, Upload};

use crate::context::RequestContext;

/// Request to register upload metadata.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RegisterUploadRequest {
    /// Original client file name.
    pub file_name: String,
    /// Stored object name.
    pub stored_name: String,
    /// Object key / path within the bucket.
    pub file_path: String,
    /// MIME type.
    pub mime_type: String,
    /// Coarse type bucket (`image`, `document`, ...).
    pub file_type: String,
    /// Whether the object is publicly addressable.
    pub is_public: bool,
    /// Object size in bytes.
    pub size_bytes: i64,
}

/// An upload together with its resolved public URL.
#[derive(Debug, Clone, serde::Serialize)]
pub struct UploadView {
    /// The metadata row.
    #[serde(flatten)]
    pub upload: Upload,
    /// Fully-qualified public URL.
    pub url: String,
}

/// Manages uploaded-object metadata.
#[derive(Debug, Clone)]
pub struct UploadService {
    upload_repo: Arc<UploadRepository>,
    public_base_url: String,
}

impl UploadService {
    /// Creates a new upload service.
    pub fn new(upload_repo: Arc<UploadRepository>, content_config: &ContentConfig) -> Self {
        Self {
            upload_repo,
            public_base_url: content_config.public_base_url.clone(),
        }
    }

    /// Gets an upload by ID.
    pub async fn get(&self, upload_id: Uuid) -> AppResult<UploadView> {
        let upload = self
            .upload_repo
            .find_by_id(upload_id)
            .await?
            .ok_or_else(|| AppError::not_found("Upload not found"))?;
        Ok(self.view(upload))
    }

    /// Lists uploads with pagination.
    pub async fn list(&self, page: PageRequest) -> AppResult<PageResponse<UploadView>> {
        let page_response = self.upload_repo.find_all(&page).await?;
        Ok(PageResponse {
            items: page_response
                .items
                .into_iter()
                .map(|u| self.view(u))
                .collect(),
            page: page_response.page,
            page_size: page_response.page_size,
            total_items: page_response.total_items,
            total_pages: page_response.total_pages,
        })
    }

    /// Registers metadata for a stored object.
    pub async fn register(
        &self,
        ctx: &RequestContext,
        req: RegisterUploadRequest,
    ) -> AppResult<UploadView> {
        if req.file_path.trim().is_empty() {
            return Err(AppError::validation("Upload file path cannot be empty"));
        }

        let upload = self
            .upload_repo
            .create(&CreateUpload {
                file_name: req.file_name,
                stored_name: req.stored_name,
                file_path: req.file_path,
                mime_type: req.mime_type,
                file_type: req.file_type,
                is_public: req.is_public,
                size_bytes: req.size_bytes,
                created_by: ctx.user_id,
            })
            .await?;

        info!(user_id = %ctx.user_id, upload_id = %upload.id, "Upload registered");
        Ok(self.view(upload))
    }

    /// Deletes upload metadata.
    pub async fn delete(&self, ctx: &RequestContext, upload_id: Uuid) -> AppResult<()> {
        if !self.upload_repo.delete(upload_id).await? {
            return Err(AppError::not_found("Upload not found"));
        }
        info!(user_id = %ctx.user_id, upload_id = %upload_id, "Upload deleted");
        Ok(())
    }

    fn view(&self, upload: Upload) -> UploadView {
        let url = upload.public_url(&self.public_base_url);
        UploadView { upload, url }
    }
}
