//! Post CRUD and workflow transitions.
//!
//! State legality lives in [`WorkflowAction`]; this service layers the
//! caller checks, persistence, audit, and view tracking on top.

use std::sync::Arc;

use chrono::Utc;
use serde_json::json;
use tracing::{info, warn};
use uuid::Uuid;

use atrium_auth::permission::resolver::PermissionResolver;
use atrium_core::error::AppError;
use atrium_core::result::AppResult;
use atrium_core::types::pagination::{PageRequest, PageResponse};
use atrium_database::repositories::analytics::AnalyticsRepository;
use atrium_database::repositories::audit::AuditRepository;
use atrium_database::repositories::post::PostRepository;
use atrium_entity::audit::CreateAuditEntry;
use atrium_entity::post::{CreatePost, Post, PostStatus, UpdatePost, WorkflowAction};

use crate::context::RequestContext;

/// Roles that may act on posts they do not own.
const ELEVATED_ROLES: &[&str] = &["editor", "admin", "super_admin"];

/// A post together with its taxonomy links.
#[derive(Debug, Clone, serde::Serialize)]
pub struct PostDetail {
    /// The post row.
    #[serde(flatten)]
    pub post: Post,
    /// Linked category IDs.
    pub category_ids: Vec<Uuid>,
    /// Linked tag IDs.
    pub tag_ids: Vec<Uuid>,
}

/// Request to create a post.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CreatePostRequest {
    /// URL slug, unique across posts.
    pub slug: String,
    /// Title.
    pub title: String,
    /// Short summary.
    pub excerpt: Option<String>,
    /// Full body.
    pub body: String,
    /// Linked category IDs.
    #[serde(default)]
    pub category_ids: Vec<Uuid>,
    /// Linked tag IDs.
    #[serde(default)]
    pub tag_ids: Vec<Uuid>,
}

/// Manages posts through their whole lifecycle.
#[derive(Debug, Clone)]
pub struct PostService {
    post_repo: Arc<PostRepository>,
    analytics_repo: Arc<AnalyticsRepository>,
    audit_repo: Arc<AuditRepository>,
    resolver: Arc<PermissionResolver>,
}

impl PostService {
    /// Creates a new post service.
    pub fn new(
        post_repo: Arc<PostRepository>,
        analytics_repo: Arc<AnalyticsRepository>,
        audit_repo: Arc<AuditRepository>,
        resolver: Arc<PermissionResolver>,
    ) -> Self {
        Self {
            post_repo,
            analytics_repo,
            audit_repo,
            resolver,
        }
    }

    /// Creates a post as a draft.
    pub async fn create(&self, ctx: &RequestContext, req: CreatePostRequest) -> AppResult<Post> {
        if req.title.trim().is_empty() {
            return Err(AppError::validation("Post title cannot be empty"));
        }
        if self.post_repo.find_by_slug(&req.slug).await?.is_some() {
            return Err(AppError::conflict(format!(
                "A post with slug '{}' already exists",
                req.slug
            )));
        }

        let post = self
            .post_repo
            .create(&CreatePost {
                slug: req.slug,
                title: req.title,
                excerpt: req.excerpt,
                body: req.body,
                created_by: ctx.user_id,
                category_ids: req.category_ids,
                tag_ids: req.tag_ids,
            })
            .await?;

        info!(user_id = %ctx.user_id, post_id = %post.id, slug = %post.slug, "Post created");
        Ok(post)
    }

    /// Gets a post by ID and records one view against today's rollup.
    ///
    /// View tracking failures are logged and swallowed so a rollup hiccup
    /// never breaks a read.
    pub async fn get(&self, post_id: Uuid) -> AppResult<PostDetail> {
        let post = self.find(post_id).await?;

        if let Err(e) = self
            .analytics_repo
            .increment_daily("post", post_id, Utc::now())
            .await
        {
            warn!(post_id = %post_id, error = %e, "View tracking failed");
        }

        self.with_links(post).await
    }

    /// Gets a post by slug without touching the view rollup.
    pub async fn get_by_slug(&self, slug: &str) -> AppResult<PostDetail> {
        let post = self
            .post_repo
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::not_found("Post not found"))?;
        self.with_links(post).await
    }

    /// Lists posts with pagination and an optional status filter.
    pub async fn list(
        &self,
        status: Option<PostStatus>,
        page: PageRequest,
    ) -> AppResult<PageResponse<Post>> {
        self.post_repo.find_all(status, &page).await
    }

    /// Updates a post's fields and links.
    ///
    /// `published_at` is stamped only when the status *newly* becomes
    /// published relative to the stored row, never on a re-save of an
    /// already-published post.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        post_id: Uuid,
        req: UpdatePost,
    ) -> AppResult<Post> {
        let mut post = self.find(post_id).await?;

        if let Some(slug) = &req.slug {
            if let Some(other) = self.post_repo.find_by_slug(slug).await? {
                if other.id != post_id {
                    return Err(AppError::conflict(format!(
                        "A post with slug '{slug}' already exists"
                    )));
                }
            }
            post.slug = slug.clone();
        }
        if let Some(title) = req.title {
            post.title = title;
        }
        if let Some(excerpt) = req.excerpt {
            post.excerpt = Some(excerpt);
        }
        if let Some(body) = req.body {
            post.body = body;
        }
        if let Some(status) = req.status {
            if status == PostStatus::Published && post.status != PostStatus::Published {
                post.published_at = Some(Utc::now());
            }
            post.status = status;
        }
        post.updated_by = ctx.user_id;

        let updated = self
            .post_repo
            .update(&post, req.category_ids.as_deref(), req.tag_ids.as_deref())
            .await?;

        info!(user_id = %ctx.user_id, post_id = %post_id, "Post updated");
        Ok(updated)
    }

    /// Deletes a post and all dependent rows in one transaction.
    pub async fn delete(&self, ctx: &RequestContext, post_id: Uuid) -> AppResult<()> {
        self.post_repo.delete(post_id).await?;
        info!(user_id = %ctx.user_id, post_id = %post_id, "Post deleted");
        Ok(())
    }

    /// Applies a workflow action to a post.
    ///
    /// Submit-review additionally requires the caller to be the author or
    /// hold an elevated role; state legality itself is decided by
    /// [`WorkflowAction::apply`]. A rejection with a reason appends an
    /// audit entry carrying it.
    pub async fn transition(
        &self,
        ctx: &RequestContext,
        post_id: Uuid,
        action: WorkflowAction,
        reason: Option<String>,
    ) -> AppResult<Post> {
        let post = self.find(post_id).await?;

        if action == WorkflowAction::SubmitReview
            && post.created_by != ctx.user_id
            && !self.resolver.holds_any_role(ctx.user_id, ELEVATED_ROLES).await
        {
            return Err(AppError::forbidden(
                "Only the author or an editor may submit this post for review",
            ));
        }

        let next = action.apply(post.status)?;
        let published_at = if action.publishes() {
            Some(Utc::now())
        } else {
            None
        };

        let updated = self
            .post_repo
            .set_status(post_id, next, published_at, ctx.user_id)
            .await?;

        if action == WorkflowAction::Reject {
            if let Some(reason) = reason {
                self.audit_repo
                    .record(&CreateAuditEntry {
                        user_id: ctx.user_id,
                        entity: "post".to_string(),
                        entity_id: post_id,
                        action: "reject".to_string(),
                        before_data: Some(json!({ "status": post.status })),
                        after_data: Some(json!({ "status": next, "reason": reason })),
                    })
                    .await?;
            }
        }

        info!(
            user_id = %ctx.user_id,
            post_id = %post_id,
            action = %action,
            from = %post.status,
            to = %next,
            "Post transitioned"
        );
        Ok(updated)
    }

    async fn find(&self, post_id: Uuid) -> AppResult<Post> {
        self.post_repo
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| AppError::not_found("Post not found"))
    }

    async fn with_links(&self, post: Post) -> AppResult<PostDetail> {
        let category_ids = self.post_repo.find_category_ids(post.id).await?;
        let tag_ids = self.post_repo.find_tag_ids(post.id).await?;
        Ok(PostDetail {
            post,
            category_ids,
            tag_ids,
        })
    }
}
