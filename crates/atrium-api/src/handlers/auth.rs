//! Auth handlers — login, logout, me, password change.

use axum::Json;
use axum::extract::State;
use axum::http::HeaderMap;

use crate::dto::request::{ChangePasswordRequest, LoginRequest};
use crate::dto::response::{ApiResponse, LoginResponse, MessageResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::handlers::validate_body;
use crate::state::AppState;

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, ApiError> {
    validate_body(&req)?;

    let ip_address = headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .map(String::from);
    let user_agent = headers
        .get("user-agent")
        .and_then(|v| v.to_str().ok())
        .map(String::from);

    let outcome = state
        .auth_service
        .login(&req.email, &req.password, ip_address, user_agent)
        .await?;

    Ok(Json(ApiResponse::ok(LoginResponse {
        access_token: outcome.access_token,
        expires_at: outcome.expires_at,
        user: outcome.user.into(),
        roles: outcome.roles,
        must_change_password: outcome.must_change_password,
    })))
}

/// POST /api/auth/logout
pub async fn logout(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.auth_service.logout(&auth).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Logged out successfully".to_string(),
    })))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state.auth_service.current_user(&auth).await?;
    Ok(Json(ApiResponse::ok(user.into())))
}

/// PUT /api/auth/password
pub async fn change_password(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<ChangePasswordRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    validate_body(&req)?;
    state
        .auth_service
        .change_password(&auth, &req.current_password, &req.new_password)
        .await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Password changed successfully".to_string(),
    })))
}
