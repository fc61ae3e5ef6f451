//! Category and tag CRUD with dependency guards.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use atrium_core::error::AppError;
use atrium_core::result::AppResult;
use atrium_database::repositories::post::PostRepository;
use atrium_database::repositories::taxonomy::TaxonomyRepository;
use atrium_entity::taxonomy::{Category, CreateCategory, CreateTag, Tag};

use crate::context::RequestContext;

/// Request to update a category.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct UpdateCategoryRequest {
    /// New slug.
    pub slug: Option<String>,
    /// New display name.
    pub name: Option<String>,
    /// New parent. `Some(None)` clears the parent.
    pub parent_id: Option<Option<Uuid>>,
}

/// Manages categories and tags.
#[derive(Debug, Clone)]
pub struct TaxonomyService {
    taxonomy_repo: Arc<TaxonomyRepository>,
    post_repo: Arc<PostRepository>,
}

impl TaxonomyService {
    /// Creates a new taxonomy service.
    pub fn new(taxonomy_repo: Arc<TaxonomyRepository>, post_repo: Arc<PostRepository>) -> Self {
        Self {
            taxonomy_repo,
            post_repo,
        }
    }

    /// Lists every category.
    pub async fn list_categories(&self) -> AppResult<Vec<Category>> {
        self.taxonomy_repo.find_all_categories().await
    }

    /// Creates a category.
    pub async fn create_category(
        &self,
        ctx: &RequestContext,
        data: CreateCategory,
    ) -> AppResult<Category> {
        if self
            .taxonomy_repo
            .find_category_by_slug(&data.slug)
            .await?
            .is_some()
        {
            return Err(AppError::conflict(format!(
                "A category with slug '{}' already exists",
                data.slug
            )));
        }
        if let Some(parent_id) = data.parent_id {
            self.require_category(parent_id).await?;
        }

        let category = self.taxonomy_repo.create_category(&data).await?;
        info!(user_id = %ctx.user_id, category_id = %category.id, "Category created");
        Ok(category)
    }

    /// Updates a category.
    pub async fn update_category(
        &self,
        ctx: &RequestContext,
        category_id: Uuid,
        req: UpdateCategoryRequest,
    ) -> AppResult<Category> {
        let mut category = self.require_category(category_id).await?;

        if let Some(slug) = req.slug {
            if let Some(other) = self.taxonomy_repo.find_category_by_slug(&slug).await? {
                if other.id != category_id {
                    return Err(AppError::conflict(format!(
                        "A category with slug '{slug}' already exists"
                    )));
                }
            }
            category.slug = slug;
        }
        if let Some(name) = req.name {
            category.name = name;
        }
        if let Some(parent_id) = req.parent_id {
            if parent_id == Some(category_id) {
                return Err(AppError::validation(
                    "A category cannot be its own parent",
                ));
            }
            if let Some(pid) = parent_id {
                self.require_category(pid).await?;
            }
            category.parent_id = parent_id;
        }

        let updated = self.taxonomy_repo.update_category(&category).await?;
        info!(user_id = %ctx.user_id, category_id = %category_id, "Category updated");
        Ok(updated)
    }

    /// Deletes a category, refusing while children or posts depend on it.
    pub async fn delete_category(&self, ctx: &RequestContext, category_id: Uuid) -> AppResult<()> {
        self.require_category(category_id).await?;

        let children = self
            .taxonomy_repo
            .count_category_children(category_id)
            .await?;
        if children > 0 {
            return Err(AppError::validation(format!(
                "Category has {children} child categories and cannot be deleted"
            )));
        }
        let posts = self.post_repo.count_by_category(category_id).await?;
        if posts > 0 {
            return Err(AppError::validation(format!(
                "Category is linked to {posts} posts and cannot be deleted"
            )));
        }

        self.taxonomy_repo.delete_category(category_id).await?;
        info!(user_id = %ctx.user_id, category_id = %category_id, "Category deleted");
        Ok(())
    }

    /// Lists every tag.
    pub async fn list_tags(&self) -> AppResult<Vec<Tag>> {
        self.taxonomy_repo.find_all_tags().await
    }

    /// Creates a tag.
    pub async fn create_tag(&self, ctx: &RequestContext, data: CreateTag) -> AppResult<Tag> {
        if self
            .taxonomy_repo
            .find_tag_by_slug(&data.slug)
            .await?
            .is_some()
        {
            return Err(AppError::conflict(format!(
                "A tag with slug '{}' already exists",
                data.slug
            )));
        }

        let tag = self.taxonomy_repo.create_tag(&data).await?;
        info!(user_id = %ctx.user_id, tag_id = %tag.id, "Tag created");
        Ok(tag)
    }

    /// Deletes a tag along with its post links.
    pub async fn delete_tag(&self, ctx: &RequestContext, tag_id: Uuid) -> AppResult<()> {
        if !self.taxonomy_repo.delete_tag(tag_id).await? {
            return Err(AppError::not_found("Tag not found"));
        }
        info!(user_id = %ctx.user_id, tag_id = %tag_id, "Tag deleted");
        Ok(())
    }

    async fn require_category(&self, id: Uuid) -> AppResult<Category> {
        self.taxonomy_repo
            .find_category(id)
            .await?
            .ok_or_else(|| AppError::not_found("Category not found"))
    }
}
