//! Public, unauthenticated content endpoints.

use axum::Json;
use axum::extract::{Path, State};

use atrium_core::error::AppError;
use atrium_entity::post::PostStatus;
use atrium_service::post::service::PostDetail;
use atrium_service::settings::composer::{HeaderFooterView, HomePageView};

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/public/homepage
///
/// Always answers 200; lookup failures degrade the affected section to
/// its empty default.
pub async fn home_page(State(state): State<AppState>) -> Json<ApiResponse<HomePageView>> {
    let view = state.content_composer.compose_home_page().await;
    Json(ApiResponse::ok(view))
}

/// GET /api/public/header-footer
///
/// Always answers 200; storage problems degrade to the built-in
/// fallback chrome rather than an error.
pub async fn header_footer(State(state): State<AppState>) -> Json<ApiResponse<HeaderFooterView>> {
    let view = state.content_composer.compose_header_footer().await;
    Json(ApiResponse::ok(view))
}

/// GET /api/public/posts/{slug}
///
/// Unpublished posts are indistinguishable from missing ones here.
pub async fn post_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<ApiResponse<PostDetail>>, ApiError> {
    let detail = state.post_service.get_by_slug(&slug).await?;
    if detail.post.status != PostStatus::Published {
        return Err(AppError::not_found("Post not found").into());
    }
    Ok(Json(ApiResponse::ok(detail)))
}
