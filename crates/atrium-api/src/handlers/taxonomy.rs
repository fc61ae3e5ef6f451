//! Category and tag handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use atrium_entity::taxonomy::{Category, CreateCategory, CreateTag, Tag};
use atrium_service::taxonomy::service::UpdateCategoryRequest;

use crate::dto::request::{CreateCategoryBody, CreateTagBody};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::handlers::validate_body;
use crate::state::AppState;

/// GET /api/categories
pub async fn list_categories(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<Category>>>, ApiError> {
    state.authorize(&auth, &["posts:read"]).await?;
    let categories = state.taxonomy_service.list_categories().await?;
    Ok(Json(ApiResponse::ok(categories)))
}

/// POST /api/categories
pub async fn create_category(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<CreateCategoryBody>,
) -> Result<Json<ApiResponse<Category>>, ApiError> {
    validate_body(&body)?;
    state.authorize(&auth, &["categories:manage"]).await?;

    let category = state
        .taxonomy_service
        .create_category(
            &auth,
            CreateCategory {
                slug: body.slug,
                name: body.name,
                parent_id: body.parent_id,
            },
        )
        .await?;
    Ok(Json(ApiResponse::ok(category)))
}

/// PUT /api/categories/{id}
pub async fn update_category(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateCategoryRequest>,
) -> Result<Json<ApiResponse<Category>>, ApiError> {
    state.authorize(&auth, &["categories:manage"]).await?;
    let category = state.taxonomy_service.update_category(&auth, id, body).await?;
    Ok(Json(ApiResponse::ok(category)))
}

/// DELETE /api/categories/{id}
pub async fn delete_category(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.authorize(&auth, &["categories:manage"]).await?;
    state.taxonomy_service.delete_category(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Category deleted".to_string(),
    })))
}

/// GET /api/tags
pub async fn list_tags(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<Tag>>>, ApiError> {
    state.authorize(&auth, &["posts:read"]).await?;
    let tags = state.taxonomy_service.list_tags().await?;
    Ok(Json(ApiResponse::ok(tags)))
}

/// POST /api/tags
pub async fn create_tag(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<CreateTagBody>,
) -> Result<Json<ApiResponse<Tag>>, ApiError> {
    validate_body(&body)?;
    state.authorize(&auth, &["tags:manage"]).await?;

    let tag = state
        .taxonomy_service
        .create_tag(
            &auth,
            CreateTag {
                slug: body.slug,
                name: body.name,
            },
        )
        .await?;
    Ok(Json(ApiResponse::ok(tag)))
}

/// DELETE /api/tags/{id}
pub async fn delete_tag(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.authorize(&auth, &["tags:manage"]).await?;
    state.taxonomy_service.delete_tag(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Tag deleted".to_string(),
    })))
}
