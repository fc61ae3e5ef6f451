//! Event CRUD.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;
use uuid::Uuid;

use atrium_core::config::ContentConfig;
use atrium_core::error::AppError;
use atrium_core::result::AppResult;
use atrium_core::types::pagination::{PageRequest, PageResponse};
use atrium_database::repositories::event::EventRepository;
use atrium_database::repositories::upload::UploadRepository;
use atrium_entity::event::{CreateEvent, Event};

use crate::context::RequestContext;

/// Request to update an event.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct UpdateEventRequest {
    /// New slug.
    pub slug: Option<String>,
    /// New title.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New start time.
    pub starts_at: Option<DateTime<Utc>>,
    /// New end time.
    pub ends_at: Option<DateTime<Utc>>,
    /// New location.
    pub location: Option<String>,
    /// New cover image reference.
    pub cover_upload_id: Option<Uuid>,
    /// New visibility.
    pub is_published: Option<bool>,
}

/// An event with its cover reference resolved to a public URL.
#[derive(Debug, Clone, serde::Serialize)]
pub struct EventView {
    /// The event row.
    #[serde(flatten)]
    pub event: Event,
    /// Public URL of the cover image, when one is set and resolvable.
    pub cover_url: Option<String>,
}

/// Manages calendar events.
#[derive(Debug, Clone)]
pub struct EventService {
    event_repo: Arc<EventRepository>,
    upload_repo: Arc<UploadRepository>,
    public_base_url: String,
}

impl EventService {
    /// Creates a new event service.
    pub fn new(
        event_repo: Arc<EventRepository>,
        upload_repo: Arc<UploadRepository>,
        content_config: &ContentConfig,
    ) -> Self {
        Self {
            event_repo,
            upload_repo,
            public_base_url: content_config.public_base_url.clone(),
        }
    }

    /// Gets an event by ID.
    pub async fn get(&self, event_id: Uuid) -> AppResult<EventView> {
        let event = self.require(event_id).await?;
        self.view(event).await
    }

    /// Lists events with pagination.
    pub async fn list(&self, page: PageRequest) -> AppResult<PageResponse<EventView>> {
        let events = self.event_repo.find_all(&page).await?;

        let cover_ids: Vec<Uuid> = {
            let mut ids: Vec<Uuid> = events
                .items
                .iter()
                .filter_map(|e| e.cover_upload_id)
                .collect();
            ids.sort();
            ids.dedup();
            ids
        };
        let covers: HashMap<Uuid, String> = self
            .upload_repo
            .find_by_ids(&cover_ids)
            .await?
            .into_iter()
            .map(|u| (u.id, u.public_url(&self.public_base_url)))
            .collect();

        Ok(PageResponse {
            items: events
                .items
                .into_iter()
                .map(|event| {
                    let cover_url = event
                        .cover_upload_id
                        .and_then(|id| covers.get(&id).cloned());
                    EventView { event, cover_url }
                })
                .collect(),
            page: events.page,
            page_size: events.page_size,
            total_items: events.total_items,
            total_pages: events.total_pages,
        })
    }

    /// Creates an event.
    pub async fn create(&self, ctx: &RequestContext, data: CreateEvent) -> AppResult<EventView> {
        if let Some(ends_at) = data.ends_at {
            if ends_at < data.starts_at {
                return Err(AppError::validation("Event cannot end before it starts"));
            }
        }
        if self.event_repo.find_by_slug(&data.slug).await?.is_some() {
            return Err(AppError::conflict(format!(
                "An event with slug '{}' already exists",
                data.slug
            )));
        }

        let event = self.event_repo.create(&data).await?;
        info!(user_id = %ctx.user_id, event_id = %event.id, slug = %event.slug, "Event created");
        self.view(event).await
    }

    /// Updates an event.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        event_id: Uuid,
        req: UpdateEventRequest,
    ) -> AppResult<EventView> {
        let mut event = self.require(event_id).await?;

        if let Some(slug) = req.slug {
            if let Some(other) = self.event_repo.find_by_slug(&slug).await? {
                if other.id != event_id {
                    return Err(AppError::conflict(format!(
                        "An event with slug '{slug}' already exists"
                    )));
                }
            }
            event.slug = slug;
        }
        if let Some(title) = req.title {
            event.title = title;
        }
        if let Some(description) = req.description {
            event.description = Some(description);
        }
        if let Some(starts_at) = req.starts_at {
            event.starts_at = starts_at;
        }
        if let Some(ends_at) = req.ends_at {
            event.ends_at = Some(ends_at);
        }
        if let Some(location) = req.location {
            event.location = Some(location);
        }
        if let Some(cover) = req.cover_upload_id {
            event.cover_upload_id = Some(cover);
        }
        if let Some(is_published) = req.is_published {
            event.is_published = is_published;
        }

        if let Some(ends_at) = event.ends_at {
            if ends_at < event.starts_at {
                return Err(AppError::validation("Event cannot end before it starts"));
            }
        }

        let updated = self.event_repo.update(&event).await?;
        info!(user_id = %ctx.user_id, event_id = %event_id, "Event updated");
        self.view(updated).await
    }

    /// Deletes an event.
    pub async fn delete(&self, ctx: &RequestContext, event_id: Uuid) -> AppResult<()> {
        if !self.event_repo.delete(event_id).await? {
            return Err(AppError::not_found("Event not found"));
        }
        info!(user_id = %ctx.user_id, event_id = %event_id, "Event deleted");
        Ok(())
    }

    async fn require(&self, event_id: Uuid) -> AppResult<Event> {
        self.event_repo
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::not_found("Event not found"))
    }

    async fn view(&self, event: Event) -> AppResult<EventView> {
        let cover_url = match event.cover_upload_id {
            Some(id) => self
                .upload_repo
                .find_by_id(id)
                .await?
                .map(|u| u.public_url(&self.public_base_url)),
            None => None,
        };
        Ok(EventView { event, cover_url })
    }
}
