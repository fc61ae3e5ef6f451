//! Authentication flows: login, logout, and password changes.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use sha2::{Digest, Sha256};
use tracing::info;
use uuid::Uuid;

use atrium_auth::jwt::encoder::JwtEncoder;
use atrium_auth::password::hasher::PasswordHasher;
use atrium_auth::password::validator::PasswordValidator;
use atrium_core::config::SessionConfig;
use atrium_core::error::AppError;
use atrium_core::result::AppResult;
use atrium_database::repositories::permission::PermissionRepository;
use atrium_database::repositories::session::SessionRepository;
use atrium_database::repositories::user::UserRepository;
use atrium_entity::session::CreateSession;
use atrium_entity::user::User;

use crate::context::RequestContext;

/// Result of a successful login.
#[derive(Debug, Clone, serde::Serialize)]
pub struct LoginOutcome {
    /// Signed bearer token.
    pub access_token: String,
    /// When the token expires.
    pub expires_at: DateTime<Utc>,
    /// The authenticated user.
    pub user: User,
    /// Role names held at login.
    pub roles: Vec<String>,
    /// Set when the account flag demands a change or the password has
    /// exceeded its maximum age.
    pub must_change_password: bool,
}

/// Handles login, logout, and password self-service.
#[derive(Debug, Clone)]
pub struct AuthService {
    user_repo: Arc<UserRepository>,
    session_repo: Arc<SessionRepository>,
    permission_repo: Arc<PermissionRepository>,
    encoder: Arc<JwtEncoder>,
    hasher: Arc<PasswordHasher>,
    validator: Arc<PasswordValidator>,
    absolute_timeout_hours: i64,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        session_repo: Arc<SessionRepository>,
        permission_repo: Arc<PermissionRepository>,
        encoder: Arc<JwtEncoder>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
        session_config: &SessionConfig,
    ) -> Self {
        Self {
            user_repo,
            session_repo,
            permission_repo,
            encoder,
            hasher,
            validator,
            absolute_timeout_hours: session_config.absolute_timeout_hours,
        }
    }

    /// Authenticates a user and opens a fresh session.
    ///
    /// A successful login deactivates every prior session for the user,
    /// so at most one session is intended to be live at a time.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
        ip_address: Option<String>,
        user_agent: Option<String>,
    ) -> AppResult<LoginOutcome> {
        let user = self
            .user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::unauthorized("Invalid email or password"))?;

        if !self.hasher.verify_password(password, &user.password_hash)? {
            self.user_repo.record_failed_login(user.id).await?;
            return Err(AppError::unauthorized("Invalid email or password"));
        }

        let superseded = self.session_repo.deactivate_all_for_user(user.id).await?;
        let roles = self.permission_repo.find_role_names_by_user(user.id).await?;

        let session_id = Uuid::new_v4();
        let (access_token, expires_at) = self.encoder.generate_access_token(
            user.id,
            session_id,
            &user.email,
            &user.full_name,
            roles.clone(),
        )?;

        let session = CreateSession {
            id: session_id,
            user_id: user.id,
            token_hash: hash_token(&access_token),
            expires_at: Utc::now() + Duration::hours(self.absolute_timeout_hours),
            ip_address,
            user_agent,
        };
        self.session_repo.create(&session).await?;
        self.user_repo.record_login(user.id).await?;

        let must_change_password =
            user.must_change_password || self.validator.is_expired(user.password_changed_at);

        info!(
            user_id = %user.id,
            session_id = %session_id,
            superseded_sessions = superseded,
            "User logged in"
        );

        Ok(LoginOutcome {
            access_token,
            expires_at,
            user,
            roles,
            must_change_password,
        })
    }

    /// Logs out by deactivating the current session.
    pub async fn logout(&self, ctx: &RequestContext) -> AppResult<()> {
        self.session_repo.deactivate(ctx.session_id).await?;
        info!(user_id = %ctx.user_id, session_id = %ctx.session_id, "User logged out");
        Ok(())
    }

    /// Loads the authenticated user's own record.
    pub async fn current_user(&self, ctx: &RequestContext) -> AppResult<User> {
        self.user_repo
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Changes the caller's password after verifying the current one.
    ///
    /// The new password runs through the full complexity policy before
    /// hashing; prior sessions stay live, only the flag and timestamps
    /// change.
    pub async fn change_password(
        &self,
        ctx: &RequestContext,
        current_password: &str,
        new_password: &str,
    ) -> AppResult<()> {
        let user = self.current_user(ctx).await?;

        if !self
            .hasher
            .verify_password(current_password, &user.password_hash)?
        {
            return Err(AppError::unauthorized("Current password is incorrect"));
        }
        if current_password == new_password {
            return Err(AppError::validation(
                "New password must differ from the current password",
            ));
        }
        self.validator.validate(new_password)?;

        let hash = self.hasher.hash_password(new_password)?;
        self.user_repo
            .set_password(user.id, &hash, false, Utc::now())
            .await?;

        info!(user_id = %user.id, "Password changed");
        Ok(())
    }
}

/// SHA-256 hex digest of a bearer token, as stored on the session row.
pub fn hash_token(token: &str) -> String {
    format!("{:x}", Sha256::digest(token.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_token_is_stable_hex() {
        let a = hash_token("token-one");
        let b = hash_token("token-one");
        let c = hash_token("token-two");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|ch| ch.is_ascii_hexdigit()));
    }
}
