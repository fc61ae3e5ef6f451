//! Role and permission entity models.
//!
//! The authorization graph is static at runtime: users link to roles via
//! `user_roles`, roles link to permissions via `role_permissions`, and a
//! permission is identified by its `(resource, action)` pair.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A named role (e.g. `author`, `editor`, `admin`, `super_admin`).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Role {
    /// Unique role identifier.
    pub id: Uuid,
    /// Unique role name.
    pub name: String,
}

/// A single grantable permission, identified by `(resource, action)`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Permission {
    /// Unique permission identifier.
    pub id: Uuid,
    /// Resource the permission applies to (e.g. `posts`).
    pub resource: String,
    /// Action on the resource (e.g. `approve`).
    pub action: String,
}

impl Permission {
    /// Render as the canonical `resource:action` string.
    pub fn key(&self) -> String {
        format!("{}:{}", self.resource, self.action)
    }
}
