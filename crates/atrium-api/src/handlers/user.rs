//! User administration handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use atrium_core::types::pagination::PageResponse;
use atrium_entity::user::User;
use atrium_service::user::service::{CreateUserRequest, ProvisionedUser};

use crate::dto::request::{CreateUserBody, UpdateUserBody};
use crate::dto::response::{ApiResponse, ResetPasswordResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, PaginationParams};
use crate::handlers::validate_body;
use crate::state::AppState;

/// GET /api/users
pub async fn list_users(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<User>>>, ApiError> {
    state.authorize(&auth, &["users:manage"]).await?;
    let page = state
        .user_service
        .list(pagination.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// GET /api/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    state.authorize(&auth, &["users:manage"]).await?;
    let user = state.user_service.get(id).await?;
    Ok(Json(ApiResponse::ok(user.into())))
}

/// POST /api/users
pub async fn create_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<CreateUserBody>,
) -> Result<Json<ApiResponse<ProvisionedUser>>, ApiError> {
    validate_body(&body)?;
    state.authorize(&auth, &["users:manage"]).await?;

    let provisioned = state
        .user_service
        .create(
            &auth,
            CreateUserRequest {
                email: body.email,
                full_name: body.full_name,
                password: body.password,
            },
        )
        .await?;
    Ok(Json(ApiResponse::ok(provisioned)))
}

/// PUT /api/users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateUserBody>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    state.authorize(&auth, &["users:manage"]).await?;
    let user = state
        .user_service
        .update(&auth, id, body.email, body.full_name)
        .await?;
    Ok(Json(ApiResponse::ok(user.into())))
}

/// POST /api/users/{id}/reset-password
pub async fn reset_password(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ResetPasswordResponse>>, ApiError> {
    state.authorize(&auth, &["users:manage"]).await?;
    let temp_password = state.user_service.reset_password(&auth, id).await?;
    Ok(Json(ApiResponse::ok(ResetPasswordResponse {
        temp_password,
    })))
}
