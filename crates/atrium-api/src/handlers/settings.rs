//! Settings document handlers (admin-facing).

use axum::Json;
use axum::extract::{Path, State};

use atrium_entity::settings::Setting;

use crate::dto::request::SetSettingKeyBody;
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/settings
pub async fn list_settings(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<Setting>>>, ApiError> {
    state.authorize(&auth, &["settings:manage"]).await?;
    let settings = state.settings_service.list().await?;
    Ok(Json(ApiResponse::ok(settings)))
}

/// GET /api/settings/{category}
pub async fn get_settings(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(category): Path<String>,
) -> Result<Json<ApiResponse<Setting>>, ApiError> {
    state.authorize(&auth, &["settings:manage"]).await?;
    let setting = state.settings_service.get(&category).await?;
    Ok(Json(ApiResponse::ok(setting)))
}

/// PUT /api/settings/{category}
pub async fn upsert_settings(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(category): Path<String>,
    Json(document): Json<serde_json::Value>,
) -> Result<Json<ApiResponse<Setting>>, ApiError> {
    state.authorize(&auth, &["settings:manage"]).await?;
    let setting = state
        .settings_service
        .upsert(&auth, &category, document)
        .await?;
    Ok(Json(ApiResponse::ok(setting)))
}

/// PUT /api/settings/{category}/{key}
pub async fn set_settings_key(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((category, key)): Path<(String, String)>,
    Json(body): Json<SetSettingKeyBody>,
) -> Result<Json<ApiResponse<Setting>>, ApiError> {
    state.authorize(&auth, &["settings:manage"]).await?;
    let setting = state
        .settings_service
        .set_key(&auth, &category, &key, body.value)
        .await?;
    Ok(Json(ApiResponse::ok(setting)))
}

/// DELETE /api/settings/{category}/{key}
pub async fn delete_settings_key(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((category, key)): Path<(String, String)>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.authorize(&auth, &["settings:manage"]).await?;
    state
        .settings_service
        .delete_key(&auth, &category, &key)
        .await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Settings key removed".to_string(),
    })))
}
