//! `AuthUser` extractor — pulls the JWT from the Authorization header,
//! validates it, confirms a live session, and injects the request context.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use atrium_core::error::AppError;
use atrium_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated user context available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::unauthorized("Invalid Authorization header format"))?;

        let claims = state.jwt_decoder.decode_access_token(token)?;

        // Liveness and the sliding inactivity window are enforced against
        // the session row, not the token alone.
        let session = state.session_guard.validate(claims.user_id()).await?;

        let ip_address = parts
            .headers
            .get("x-forwarded-for")
            .and_then(|v| v.to_str().ok())
            .map(String::from);

        let user_agent = parts
            .headers
            .get("user-agent")
            .and_then(|v| v.to_str().ok())
            .map(String::from);

        let ctx = RequestContext::new(
            claims.user_id(),
            session.id,
            claims.email,
            claims.full_name,
            claims.roles,
            ip_address,
            user_agent,
        );

        Ok(AuthUser(ctx))
    }
}
