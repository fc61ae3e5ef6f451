//! Post handlers — CRUD and workflow transitions.

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use uuid::Uuid;

use atrium_core::types::pagination::PageResponse;
use atrium_entity::post::{Post, PostStatus, UpdatePost, WorkflowAction};
use atrium_service::post::service::{CreatePostRequest, PostDetail};

use crate::dto::request::{CreatePostBody, RejectBody, UpdatePostBody};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::{AuthUser, PaginationParams};
use crate::handlers::validate_body;
use crate::state::AppState;

/// Query parameters for the post listing.
#[derive(Debug, Deserialize)]
pub struct ListPostsQuery {
    /// Optional status filter.
    pub status: Option<String>,
}

/// GET /api/posts
pub async fn list_posts(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<ListPostsQuery>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<Post>>>, ApiError> {
    state.authorize(&auth, &["posts:read"]).await?;

    let status = query
        .status
        .map(|s| s.parse::<PostStatus>())
        .transpose()?;
    let page = state
        .post_service
        .list(status, pagination.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// GET /api/posts/{id}
pub async fn get_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<PostDetail>>, ApiError> {
    state.authorize(&auth, &["posts:read"]).await?;
    let detail = state.post_service.get(id).await?;
    Ok(Json(ApiResponse::ok(detail)))
}

/// POST /api/posts
pub async fn create_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<CreatePostBody>,
) -> Result<Json<ApiResponse<Post>>, ApiError> {
    validate_body(&body)?;
    state.authorize(&auth, &["posts:create"]).await?;

    let post = state
        .post_service
        .create(
            &auth,
            CreatePostRequest {
                slug: body.slug,
                title: body.title,
                excerpt: body.excerpt,
                body: body.body,
                category_ids: body.category_ids,
                tag_ids: body.tag_ids,
            },
        )
        .await?;
    Ok(Json(ApiResponse::ok(post)))
}

/// PUT /api/posts/{id}
pub async fn update_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdatePostBody>,
) -> Result<Json<ApiResponse<Post>>, ApiError> {
    state.authorize(&auth, &["posts:update"]).await?;

    let status = body.status.map(|s| s.parse::<PostStatus>()).transpose()?;
    let post = state
        .post_service
        .update(
            &auth,
            id,
            UpdatePost {
                slug: body.slug,
                title: body.title,
                excerpt: body.excerpt,
                body: body.body,
                status,
                category_ids: body.category_ids,
                tag_ids: body.tag_ids,
            },
        )
        .await?;
    Ok(Json(ApiResponse::ok(post)))
}

/// DELETE /api/posts/{id}
pub async fn delete_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<serde_json::Value>>, ApiError> {
    state.authorize(&auth, &["posts:delete"]).await?;
    state.post_service.delete(&auth, id).await?;
    Ok(Json(ApiResponse::ok(
        serde_json::json!({ "message": "Post deleted" }),
    )))
}

/// POST /api/posts/{id}/submit-review
pub async fn submit_review(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<TransitionResponse>>, ApiError> {
    state.authorize(&auth, &["posts:submit-review"]).await?;
    transition(state, auth, id, WorkflowAction::SubmitReview, None).await
}

/// POST /api/posts/{id}/approve
pub async fn approve(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<TransitionResponse>>, ApiError> {
    state.authorize(&auth, &["posts:approve"]).await?;
    transition(state, auth, id, WorkflowAction::Approve, None).await
}

/// POST /api/posts/{id}/reject
///
/// The body is `{}` when the reviewer gives no reason.
pub async fn reject(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(body): Json<RejectBody>,
) -> Result<Json<ApiResponse<TransitionResponse>>, ApiError> {
    state.authorize(&auth, &["posts:reject"]).await?;
    transition(state, auth, id, WorkflowAction::Reject, body.reason).await
}

/// POST /api/posts/{id}/archive
pub async fn archive(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<TransitionResponse>>, ApiError> {
    state.authorize(&auth, &["posts:archive"]).await?;
    transition(state, auth, id, WorkflowAction::Archive, None).await
}

/// POST /api/posts/{id}/publish
pub async fn publish(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<TransitionResponse>>, ApiError> {
    state.authorize(&auth, &["posts:publish"]).await?;
    transition(state, auth, id, WorkflowAction::Publish, None).await
}

/// Response body for workflow transitions.
#[derive(Debug, Clone, serde::Serialize)]
pub struct TransitionResponse {
    /// Human-readable confirmation.
    pub message: String,
    /// The post after the transition.
    pub post: Post,
}

async fn transition(
    state: AppState,
    auth: AuthUser,
    id: Uuid,
    action: WorkflowAction,
    reason: Option<String>,
) -> Result<Json<ApiResponse<TransitionResponse>>, ApiError> {
    let post = state
        .post_service
        .transition(&auth, id, action, reason)
        .await?;
    Ok(Json(ApiResponse::ok(TransitionResponse {
        message: format!("Post is now {}", post.status),
        post,
    })))
}
