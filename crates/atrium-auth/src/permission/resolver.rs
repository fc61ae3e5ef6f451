//! Fail-closed permission resolution.
//!
//! Permissions are recomputed per request from the role join tables;
//! there is no cache. Any lookup failure is treated as "no permission"
//! and logged, never surfaced to the caller beyond the boolean.

use std::collections::HashSet;

use tracing::debug;
use uuid::Uuid;

use atrium_database::repositories::permission::PermissionRepository;

/// Resolves whether a user holds a set of `resource:action` permissions.
#[derive(Debug, Clone)]
pub struct PermissionResolver {
    permissions: PermissionRepository,
}

impl PermissionResolver {
    /// Create a resolver over the permission repository.
    pub fn new(permissions: PermissionRepository) -> Self {
        Self { permissions }
    }

    /// Whether the user holds *all* of the required `resource:action` keys.
    ///
    /// An empty requirement list grants access unconditionally. A missing
    /// user or any persistence error denies access.
    pub async fn has_all(&self, user_id: Uuid, required: &[&str]) -> bool {
        if required.is_empty() {
            return true;
        }

        match self.permissions.user_exists(user_id).await {
            Ok(true) => {}
            Ok(false) => {
                debug!(user_id = %user_id, "permission check for unknown user");
                return false;
            }
            Err(e) => {
                debug!(user_id = %user_id, error = %e, "permission lookup failed");
                return false;
            }
        }

        let granted = match self.permissions.find_by_user(user_id).await {
            Ok(permissions) => permissions
                .iter()
                .map(|p| p.key())
                .collect::<HashSet<String>>(),
            Err(e) => {
                debug!(user_id = %user_id, error = %e, "permission lookup failed");
                return false;
            }
        };

        holds_all(&granted, required)
    }

    /// Whether the user holds at least one of the named roles.
    ///
    /// Fails closed like [`has_all`](Self::has_all).
    pub async fn holds_any_role(&self, user_id: Uuid, roles: &[&str]) -> bool {
        match self.permissions.find_role_names_by_user(user_id).await {
            Ok(held) => roles.iter().any(|r| held.iter().any(|h| h == r)),
            Err(e) => {
                debug!(user_id = %user_id, error = %e, "role lookup failed");
                false
            }
        }
    }
}

/// Set check: every required key must be present (logical AND).
pub fn holds_all(granted: &HashSet<String>, required: &[&str]) -> bool {
    required.iter().all(|r| granted.contains(*r))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn granted(keys: &[&str]) -> HashSet<String> {
        keys.iter().map(|k| k.to_string()).collect()
    }

    #[test]
    fn test_requires_every_key() {
        let set = granted(&["posts:read", "posts:write"]);
        assert!(holds_all(&set, &["posts:read"]));
        assert!(holds_all(&set, &["posts:read", "posts:write"]));
        assert!(!holds_all(&set, &["posts:read", "posts:delete"]));
    }

    #[test]
    fn test_empty_requirements_always_pass() {
        assert!(holds_all(&granted(&[]), &[]));
        assert!(holds_all(&granted(&["posts:read"]), &[]));
    }

    #[test]
    fn test_empty_grants_deny_any_requirement() {
        assert!(!holds_all(&granted(&[]), &["posts:read"]));
    }
}
