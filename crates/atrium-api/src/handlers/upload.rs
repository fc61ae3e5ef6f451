//! Upload metadata handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use atrium_core::types::pagination::PageResponse;
use atrium_service::upload::service::{RegisterUploadRequest, UploadView};

use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// GET /api/uploads
pub async fn list_uploads(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<UploadView>>>, ApiError> {
    state.authorize(&auth, &["uploads:manage"]).await?;
    let page = state
        .upload_service
        .list(pagination.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// GET /api/uploads/{id}
pub async fn get_upload(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<UploadView>>, ApiError> {
    state.authorize(&auth, &["uploads:manage"]).await?;
    let upload = state.upload_service.get(id).await?;
    Ok(Json(ApiResponse::ok(upload)))
}

/// POST /api/uploads
pub async fn register_upload(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<RegisterUploadRequest>,
) -> Result<Json<ApiResponse<UploadView>>, ApiError> {
    state.authorize(&auth, &["uploads:manage"]).await?;
    let upload = state.upload_service.register(&auth, body).await?;
    Ok(Json(ApiResponse::ok(upload)))
}

/// DELETE /api/uploads/{id}
pub async fn delete_upload(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.authorize(&auth, &["uploads:manage"]).await?;
    state.upload_service.delete(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Upload deleted".to_string(),
    })))
}
