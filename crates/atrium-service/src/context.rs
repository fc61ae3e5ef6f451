//! Request context carrying the authenticated user and session.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Context for the current authenticated request.
///
/// Extracted by the API layer and passed into service methods so every
/// operation knows *who* is acting and from *which* session. Role names
/// are a convenience snapshot from the JWT; authorization decisions go
/// through the permission resolver against the database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: Uuid,
    /// The current session ID.
    pub session_id: Uuid,
    /// The user's email (convenience field from JWT claims).
    pub email: String,
    /// Display name (convenience field from JWT claims).
    pub full_name: String,
    /// Role names held at token issuance.
    pub roles: Vec<String>,
    /// IP address of the request origin.
    pub ip_address: Option<String>,
    /// User-Agent header value.
    pub user_agent: Option<String>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(
        user_id: Uuid,
        session_id: Uuid,
        email: String,
        full_name: String,
        roles: Vec<String>,
        ip_address: Option<String>,
        user_agent: Option<String>,
    ) -> Self {
        Self {
            user_id,
            session_id,
            email,
            full_name,
            roles,
            ip_address,
            user_agent,
        }
    }
}
