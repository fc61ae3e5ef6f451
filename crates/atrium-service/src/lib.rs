//! # atrium-service
//!
//! Business logic service layer for Atrium. Each service orchestrates
//! repositories and the auth components to implement application-level
//! use cases.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references.

pub mod auth;
pub mod context;
pub mod event;
pub mod post;
pub mod settings;
pub mod taxonomy;
pub mod upload;
pub mod user;

pub use auth::AuthService;
pub use context::RequestContext;
pub use event::EventService;
pub use post::PostService;
pub use settings::{ContentComposer, SettingsService};
pub use taxonomy::TaxonomyService;
pub use upload::UploadService;
pub use user::UserService;
