//! Application builder — wires repositories, services, and the router
//! into a running Axum server.

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
use atrium_database::repositories::{
    analytics, audit, event, permission, post, quote, session, settings, taxonomy, upload, user,
};

use crate::router::build_router;
use crate::state::AppState;

/// Runs the Atrium server with the given configuration and database pool.
pub async fn run_server(config: AppConfig, db_pool: PgPool) -> Result<(), AppError> {
    tracing::info!("Starting Atrium server...");

    // ── Step 1: Initialize repositories ──────────────────────────
    let user_repo = Arc::new(user::UserRepository::new(db_pool.clone()));
    let session_repo = Arc::new(session::SessionRepository::new(db_pool.clone()));
    let permission_repo = Arc::new(permission::PermissionRepository::new(db_pool.clone()));
    let post_repo = Arc::new(post::PostRepository::new(db_pool.clone()));
    let taxonomy_repo = Arc::new(taxonomy::TaxonomyRepository::new(db_pool.clone()));
    let event_repo = Arc::new(event::EventRepository::new(db_pool.clone()));
    let upload_repo = Arc::new(upload::UploadRepository::new(db_pool.clone()));
    let settings_repo = Arc::new(settings::SettingsRepository::new(db_pool.clone()));
    let quote_repo = Arc::new(quote::QuoteRepository::new(db_pool.clone()));
    let analytics_repo = Arc::new(analytics::AnalyticsRepository::new(db_pool.clone()));
    let audit_repo = Arc::new(audit::AuditRepository::new(db_pool.clone()));

    // ── Step 2: Initialize auth system ───────────────────────────
    let password_hasher = Arc::new(PasswordHasher::new());
    let password_validator = Arc::new(PasswordValidator::new(
        config.auth.password_min_length,
        config.auth.password_max_age_days,
    ));
    let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
    let session_guard = Arc::new(SessionGuard::new(
        session_repo.as_ref().clone(),
        &config.session,
    ));
    let permission_resolver = Arc::new(PermissionResolver::new(permission_repo.as_ref().clone()));

    // ── Step 3: Initialize services ──────────────────────────────
    let auth_service = Arc::new(atrium_service::auth::service::AuthService::new(
        Arc::clone(&user_repo),
        Arc::clone(&session_repo),
        Arc::clone(&permission_repo),
        Arc::clone(&jwt_encoder),
        Arc::clone(&password_hasher),
        Arc::clone(&password_validator),
        &config.session,
    ));
    let user_service = Arc::new(atrium_service::user::service::UserService::new(
        Arc::clone(&user_repo),
        Arc::clone(&session_repo),
        Arc::clone(&password_hasher),
        Arc::clone(&password_validator),
        &config.auth,
    ));
    let post_service = Arc::new(atrium_service::post::service::PostService::new(
        Arc::clone(&post_repo),
        Arc::clone(&analytics_repo),
        Arc::clone(&audit_repo),
        Arc::clone(&permission_resolver),
    ));
    let settings_service = Arc::new(atrium_service::settings::service::SettingsService::new(
        Arc::clone(&settings_repo),
    ));
    let content_composer = Arc::new(atrium_service::settings::composer::ContentComposer::new(
        Arc::clone(&settings_repo),
        Arc::clone(&upload_repo),
        Arc::clone(&event_repo),
        Arc::clone(&post_repo),
        Arc::clone(&quote_repo),
        &config.content,
    ));
    let taxonomy_service = Arc::new(atrium_service::taxonomy::service::TaxonomyService::new(
        Arc::clone(&taxonomy_repo),
        Arc::clone(&post_repo),
    ));
    let event_service = Arc::new(atrium_service::event::service::EventService::new(
        Arc::clone(&event_repo),
        Arc::clone(&upload_repo),
        &config.content,
    ));
    let upload_service = Arc::new(atrium_service::upload::service::UploadService::new(
        Arc::clone(&upload_repo),
        &config.content,
    ));

    // ── Step 4: Build and start HTTP server ──────────────────────
    let app_state = AppState {
        config: Arc::new(config.clone()),
        db_pool: db_pool.clone(),
        jwt_encoder,
        jwt_decoder,
        password_hasher,
        password_validator,
        session_guard,
        permission_resolver,
        user_repo,
        session_repo,
        permission_repo,
        post_repo,
        taxonomy_repo,
        event_repo,
        upload_repo,
        settings_repo,
        quote_repo,
        analytics_repo,
        audit_repo,
        auth_service,
        user_service,
        post_service,
        settings_service,
        content_composer,
        taxonomy_service,
        event_service,
        upload_service,
    };

    let app = build_router(app_state);
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("Atrium server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
    }
}
