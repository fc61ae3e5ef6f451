//! Role/permission graph repository.

use sqlx::PgPool;
use uuid::Uuid;

use atrium_core::error::{AppError, ErrorKind};
use atrium_core::result::AppResult;
use atrium_entity::permission::Permission;

/// Read-side repository over the static authorization graph
/// (`roles`, `permissions`, and their join tables).
#[derive(Debug, Clone)]
pub struct PermissionRepository {
    pool: PgPool,
}

impl PermissionRepository {
    /// Create a new permission repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Load every permission granted to a user through their roles.
    pub async fn find_by_user(&self, user_id: Uuid) -> AppResult<Vec<Permission>> {
        sqlx::query_as::<_, Permission>(
            "SELECT DISTINCT p.id, p.resource, p.action \
             FROM permissions p \
             JOIN role_permissions rp ON rp.permission_id = p.id \
             JOIN user_roles ur ON ur.role_id = rp.role_id \
             WHERE ur.user_id = $1",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to load user permissions", e)
        })
    }

    /// Load the role names attached to a user.
    pub async fn find_role_names_by_user(&self, user_id: Uuid) -> AppResult<Vec<String>> {
        sqlx::query_scalar::<_, String>(
            "SELECT r.name FROM roles r \
             JOIN user_roles ur ON ur.role_id = r.id \
             WHERE ur.user_id = $1 ORDER BY r.name",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load user roles", e))
    }

    /// Whether a user row exists. Used by the resolver to distinguish a
    /// missing principal from a user with no grants.
    pub async fn user_exists(&self, user_id: Uuid) -> AppResult<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to check user", e))?;
        Ok(count > 0)
    }
}
