//! User administration: provisioning, profile edits, password resets.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use atrium_auth::password::generator::generate_temp_password;
use atrium_auth::password::hasher::PasswordHasher;
use atrium_auth::password::validator::PasswordValidator;
use atrium_core::config::AuthConfig;
use atrium_core::error::AppError;
use atrium_core::result::AppResult;
use atrium_core::types::pagination::{PageRequest, PageResponse};
use atrium_database::repositories::session::SessionRepository;
use atrium_database::repositories::user::UserRepository;
use atrium_entity::user::{CreateUser, UpdateUser, User};

use crate::context::RequestContext;

/// Request to provision a user.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CreateUserRequest {
    /// Login email, unique.
    pub email: String,
    /// Display name.
    pub full_name: String,
    /// Initial password. When omitted a temporary one is generated and
    /// the account is flagged to change it at first login.
    pub password: Option<String>,
}

/// Result of provisioning a user.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ProvisionedUser {
    /// The created user.
    pub user: User,
    /// The generated temporary password, present only when no initial
    /// password was supplied. Shown once and never stored in clear.
    pub temp_password: Option<String>,
}

/// Manages user records on behalf of administrators.
#[derive(Debug, Clone)]
pub struct UserService {
    user_repo: Arc<UserRepository>,
    session_repo: Arc<SessionRepository>,
    hasher: Arc<PasswordHasher>,
    validator: Arc<PasswordValidator>,
    temp_password_length: usize,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        session_repo: Arc<SessionRepository>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
        auth_config: &AuthConfig,
    ) -> Self {
        Self {
            user_repo,
            session_repo,
            hasher,
            validator,
            temp_password_length: auth_config.temp_password_length,
        }
    }

    /// Lists users with pagination.
    pub async fn list(&self, page: PageRequest) -> AppResult<PageResponse<User>> {
        self.user_repo.find_all(&page).await
    }

    /// Gets a user by ID.
    pub async fn get(&self, user_id: Uuid) -> AppResult<User> {
        self.user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Provisions a new user.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        req: CreateUserRequest,
    ) -> AppResult<ProvisionedUser> {
        if self.user_repo.find_by_email(&req.email).await?.is_some() {
            return Err(AppError::conflict(format!(
                "A user with email '{}' already exists",
                req.email
            )));
        }

        let (password, temp_password, must_change) = match req.password {
            Some(p) => {
                self.validator.validate(&p)?;
                (p, None, false)
            }
            None => {
                let temp = generate_temp_password(self.temp_password_length);
                (temp.clone(), Some(temp), true)
            }
        };

        let record = CreateUser {
            email: req.email,
            full_name: req.full_name,
            password_hash: self.hasher.hash_password(&password)?,
            must_change_password: must_change,
        };
        let user = self.user_repo.create(&record).await?;

        info!(actor = %ctx.user_id, user_id = %user.id, "User provisioned");
        Ok(ProvisionedUser {
            user,
            temp_password,
        })
    }

    /// Updates a user's profile fields.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        user_id: Uuid,
        email: Option<String>,
        full_name: Option<String>,
    ) -> AppResult<User> {
        self.get(user_id).await?;

        if let Some(new_email) = &email {
            if let Some(other) = self.user_repo.find_by_email(new_email).await? {
                if other.id != user_id {
                    return Err(AppError::conflict(format!(
                        "A user with email '{new_email}' already exists"
                    )));
                }
            }
        }

        let updated = self
            .user_repo
            .update(&UpdateUser {
                id: user_id,
                email,
                full_name,
            })
            .await?;

        info!(actor = %ctx.user_id, user_id = %user_id, "User updated");
        Ok(updated)
    }

    /// Resets a user's password to a generated temporary one.
    ///
    /// The temporary password satisfies the complexity rules by
    /// construction; every active session for the user is deactivated and
    /// the account is flagged to change the password at next login.
    pub async fn reset_password(&self, ctx: &RequestContext, user_id: Uuid) -> AppResult<String> {
        self.get(user_id).await?;

        let temp = generate_temp_password(self.temp_password_length);
        let hash = self.hasher.hash_password(&temp)?;
        self.user_repo
            .set_password(user_id, &hash, true, Utc::now())
            .await?;
        let closed = self.session_repo.deactivate_all_for_user(user_id).await?;

        info!(
            actor = %ctx.user_id,
            user_id = %user_id,
            closed_sessions = closed,
            "Password reset to temporary"
        );
        Ok(temp)
    }
}
