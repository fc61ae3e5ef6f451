//! Route definitions for the Atrium HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via Axum's `State` extractor.

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(post_routes())
        .merge(taxonomy_routes())
        .merge(event_routes())
        .merge(upload_routes())
        .merge(settings_routes())
        .merge(public_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state);

    Router::new()
        .nest("/api", api_routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Auth endpoints: login, logout, me, password change
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/logout", post(handlers::auth::logout))
        .route("/auth/me", get(handlers::auth::me))
        .route("/auth/password", put(handlers::auth::change_password))
}

/// User administration endpoints
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(handlers::user::list_users))
        .route("/users", post(handlers::user::create_user))
        .route("/users/{id}", get(handlers::user::get_user))
        .route("/users/{id}", put(handlers::user::update_user))
        .route(
            "/users/{id}/reset-password",
            post(handlers::user::reset_password),
        )
}

/// Post CRUD plus the editorial workflow transitions
fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/posts", get(handlers::post::list_posts))
        .route("/posts", post(handlers::post::create_post))
        .route("/posts/{id}", get(handlers::post::get_post))
        .route("/posts/{id}", put(handlers::post::update_post))
        .route("/posts/{id}", delete(handlers::post::delete_post))
        .route(
            "/posts/{id}/submit-review",
            post(handlers::post::submit_review),
        )
        .route("/posts/{id}/approve", post(handlers::post::approve))
        .route("/posts/{id}/reject", post(handlers::post::reject))
        .route("/posts/{id}/archive", post(handlers::post::archive))
        .route("/posts/{id}/publish", post(handlers::post::publish))
}

/// Category and tag endpoints
fn taxonomy_routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(handlers::taxonomy::list_categories))
        .route("/categories", post(handlers::taxonomy::create_category))
        .route(
            "/categories/{id}",
            put(handlers::taxonomy::update_category),
        )
        .route(
            "/categories/{id}",
            delete(handlers::taxonomy::delete_category),
        )
        .route("/tags", get(handlers::taxonomy::list_tags))
        .route("/tags", post(handlers::taxonomy::create_tag))
        .route("/tags/{id}", delete(handlers::taxonomy::delete_tag))
}

/// Event endpoints
fn event_routes() -> Router<AppState> {
    Router::new()
        .route("/events", get(handlers::event::list_events))
        .route("/events", post(handlers::event::create_event))
        .route("/events/{id}", get(handlers::event::get_event))
        .route("/events/{id}", put(handlers::event::update_event))
        .route("/events/{id}", delete(handlers::event::delete_event))
}

/// Upload metadata endpoints
fn upload_routes() -> Router<AppState> {
    Router::new()
        .route("/uploads", get(handlers::upload::list_uploads))
        .route("/uploads", post(handlers::upload::register_upload))
        .route("/uploads/{id}", get(handlers::upload::get_upload))
        .route("/uploads/{id}", delete(handlers::upload::delete_upload))
}

/// Settings document endpoints (admin)
fn settings_routes() -> Router<AppState> {
    Router::new()
        .route("/settings", get(handlers::settings::list_settings))
        .route(
            "/settings/{category}",
            get(handlers::settings::get_settings),
        )
        .route(
            "/settings/{category}",
            put(handlers::settings::upsert_settings),
        )
        .route(
            "/settings/{category}/{key}",
            put(handlers::settings::set_settings_key),
        )
        .route(
            "/settings/{category}/{key}",
            delete(handlers::settings::delete_settings_key),
        )
}

/// Public content endpoints (no auth required)
fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/public/homepage", get(handlers::public::home_page))
        .route(
            "/public/header-footer",
            get(handlers::public::header_footer),
        )
        .route(
            "/public/posts/{slug}",
            get(handlers::public::post_by_slug),
        )
}

/// Health check endpoints (no auth required)
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health_check))
}

/// Build CORS layer from configuration
fn build_cors_layer(state: &AppState) -> CorsLayer {
    use axum::http::{HeaderValue, Method};
    use tower_http::cors::Any;

    let cors_config = &state.config.server.cors;

    let mut cors = CorsLayer::new();

    if cors_config.allowed_origins.contains(&"*".to_string()) {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = cors_config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    let methods: Vec<Method> = cors_config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    cors = cors.allow_methods(methods);

    cors.max_age(std::time::Duration::from_secs(cors_config.max_age_seconds))
}
