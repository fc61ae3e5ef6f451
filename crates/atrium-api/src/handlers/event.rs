//! Event handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use atrium_core::types::pagination::PageResponse;
use atrium_entity::event::CreateEvent;
use atrium_service::event::service::{EventView, UpdateEventRequest};

use crate::dto::request::CreateEventBody;
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, PaginationParams};
use crate::handlers::validate_body;
use crate::state::AppState;

/// GET /api/events
pub async fn list_events(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<EventView>>>, ApiError> {
    state.authorize(&auth, &["posts:read"]).await?;
    let page = state
        .event_service
        .list(pagination.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// GET /api/events/{id}
pub async fn get_event(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<EventView>>, ApiError> {
    state.authorize(&auth, &["posts:read"]).await?;
    let event = state.event_service.get(id).await?;
    Ok(Json(ApiResponse::ok(event)))
}

/// POST /api/events
pub async fn create_event(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<CreateEventBody>,
) -> Result<Json<ApiResponse<EventView>>, ApiError> {
    validate_body(&body)?;
    state.authorize(&auth, &["events:manage"]).await?;

    let event = state
        .event_service
        .create(
            &auth,
            CreateEvent {
                slug: body.slug,
                title: body.title,
                description: body.description,
                starts_at: body.starts_at,
                ends_at: body.ends_at,
                location: body.location,
                cover_upload_id: body.cover_upload_id,
                is_published: body.is_published,
            },
        )
        .await?;
    Ok(Json(ApiResponse::ok(event)))
}

/// PUT /api/events/{id}
pub async fn update_event(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateEventRequest>,
) -> Result<Json<ApiResponse<EventView>>, ApiError> {
    state.authorize(&auth, &["events:manage"]).await?;
    let event = state.event_service.update(&auth, id, body).await?;
    Ok(Json(ApiResponse::ok(event)))
}

/// DELETE /api/events/{id}
pub async fn delete_event(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.authorize(&auth, &["events:manage"]).await?;
    state.event_service.delete(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Event deleted".to_string(),
    })))
}
