//! HTTP request handlers, organized by domain.

use atrium_core::error::AppError;
use atrium_core::result::AppResult;
use validator::Validate;

pub mod auth;
pub mod event;
pub mod health;
pub mod post;
pub mod public;
pub mod settings;
pub mod taxonomy;
pub mod upload;
pub mod user;

/// Run derive-based validation on a request body.
pub(crate) fn validate_body<T: Validate>(body: &T) -> AppResult<()> {
    body.validate()
        .map_err(|e| AppError::validation(e.to_string()))
}
