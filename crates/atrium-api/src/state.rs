//! Application state shared across all handlers.

use std::sync::Arc;

use sqlx::PgPool;

use atrium_auth::jwt::decoder::JwtDecoder;
use atrium_auth::jwt::encoder::JwtEncoder;
use atrium_auth::password::hasher::PasswordHasher;
use atrium_auth::password::validator::PasswordValidator;
use atrium_auth::permission::resolver::PermissionResolver;
use atrium_auth::session::guard::SessionGuard;
use atrium_core::config::AppConfig;
use atrium_core::error::AppError;
use atrium_core::result::AppResult;

use atrium_database::repositories::analytics::AnalyticsRepository;
use atrium_database::repositories::audit::AuditRepository;
use atrium_database::repositories::event::EventRepository;
use atrium_database::repositories::permission::PermissionRepository;
use atrium_database::repositories::post::PostRepository;
use atrium_database::repositories::quote::QuoteRepository;
use atrium_database::repositories::session::SessionRepository;
use atrium_database::repositories::settings::SettingsRepository;
use atrium_database::repositories::taxonomy::TaxonomyRepository;
use atrium_database::repositories::upload::UploadRepository;
use atrium_database::repositories::user::UserRepository;

use atrium_service::auth::service::AuthService;
use atrium_service::context::RequestContext;
use atrium_service::event::service::EventService;
use atrium_service::post::service::PostService;
use atrium_service::settings::composer::ContentComposer;
use atrium_service::settings::service::SettingsService;
use atrium_service::taxonomy::service::TaxonomyService;
use atrium_service::upload::service::UploadService;
use atrium_service::user::service::UserService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL connection pool
    pub db_pool: PgPool,

    // ── Auth ─────────────────────────────────────────────────
    /// JWT token encoder
    pub jwt_encoder: Arc<JwtEncoder>,
    /// JWT token decoder and validator
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Password hasher (Argon2)
    pub password_hasher: Arc<PasswordHasher>,
    /// Password policy validator
    pub password_validator: Arc<PasswordValidator>,
    /// Sliding-timeout session guard
    pub session_guard: Arc<SessionGuard>,
    /// Fail-closed permission resolver
    pub permission_resolver: Arc<PermissionResolver>,

    // ── Repositories ─────────────────────────────────────────
    /// User repository
    pub user_repo: Arc<UserRepository>,
    /// Session repository
    pub session_repo: Arc<SessionRepository>,
    /// Permission graph repository
    pub permission_repo: Arc<PermissionRepository>,
    /// Post repository
    pub post_repo: Arc<PostRepository>,
    /// Taxonomy repository
    pub taxonomy_repo: Arc<TaxonomyRepository>,
    /// Event repository
    pub event_repo: Arc<EventRepository>,
    /// Upload metadata repository
    pub upload_repo: Arc<UploadRepository>,
    /// Settings repository
    pub settings_repo: Arc<SettingsRepository>,
    /// Quote repository
    pub quote_repo: Arc<QuoteRepository>,
    /// Analytics rollup repository
    pub analytics_repo: Arc<AnalyticsRepository>,
    /// Audit trail repository
    pub audit_repo: Arc<AuditRepository>,

    // ── Services ─────────────────────────────────────────────
    /// Login/logout/password self-service
    pub auth_service: Arc<AuthService>,
    /// User administration
    pub user_service: Arc<UserService>,
    /// Post CRUD and workflow
    pub post_service: Arc<PostService>,
    /// Settings administration
    pub settings_service: Arc<SettingsService>,
    /// Public read-model composer
    pub content_composer: Arc<ContentComposer>,
    /// Category and tag management
    pub taxonomy_service: Arc<TaxonomyService>,
    /// Event management
    pub event_service: Arc<EventService>,
    /// Upload metadata management
    pub upload_service: Arc<UploadService>,
}

impl AppState {
    /// Require that the caller holds every listed `resource:action`
    /// permission; resolves fail-closed against the database.
    pub async fn authorize(&self, ctx: &RequestContext, required: &[&str]) -> AppResult<()> {
        if self.permission_resolver.has_all(ctx.user_id, required).await {
            Ok(())
        } else {
            Err(AppError::forbidden("Insufficient permissions"))
        }
    }
}
