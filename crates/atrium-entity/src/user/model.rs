//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A registered user of the Atrium backend.
///
/// Roles are attached through the `user_roles` join table and loaded
/// separately; they are not part of this row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Unique login email.
    pub email: String,
    /// Human-readable full name.
    pub full_name: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// When the password was last changed. `None` means never, which the
    /// policy treats as not expired.
    pub password_changed_at: Option<DateTime<Utc>>,
    /// Whether the user must change their password on next login.
    pub must_change_password: bool,
    /// Number of consecutive failed login attempts.
    pub failed_login_attempts: i32,
    /// Last successful login time.
    pub last_login_at: Option<DateTime<Utc>>,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Login email.
    pub email: String,
    /// Full name.
    pub full_name: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Whether the first login must change the password.
    pub must_change_password: bool,
}

/// Data for updating an existing user's profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUser {
    /// The user ID to update.
    pub id: Uuid,
    /// New email address.
    pub email: Option<String>,
    /// New full name.
    pub full_name: Option<String>,
}
