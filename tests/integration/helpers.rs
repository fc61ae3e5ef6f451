//! Shared test helpers for integration tests.
//!
//! These tests need a live PostgreSQL instance; point
//! `ATRIUM__DATABASE__URL` at a scratch database before running them.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use atrium_core::config::AppConfig;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Database pool for direct queries
    pub db_pool: PgPool,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application
    pub async fn new() -> Self {
        let config = AppConfig::load("test").expect("Failed to load test config");

        let db_pool = atrium_database::connection::create_pool(&config.database)
            .await
            .expect("Failed to connect to test database");

        atrium_database::migration::run_migrations(&db_pool)
            .await
            .expect("Failed to run migrations");

        Self::clean_database(&db_pool).await;

        let user_repo = Arc::new(
            atrium_database::repositories::user::UserRepository::new(db_pool.clone()),
        );
        let session_repo = Arc::new(
            atrium_database::repositories::session::SessionRepository::new(db_pool.clone()),
        );
        let permission_repo = Arc::new(
            atrium_database::repositories::permission::PermissionRepository::new(db_pool.clone()),
        );
        let post_repo = Arc::new(
            atrium_database::repositories::post::PostRepository::new(db_pool.clone()),
        );
        let taxonomy_repo = Arc::new(
            atrium_database::repositories::taxonomy::TaxonomyRepository::new(db_pool.clone()),
        );
        let event_repo = Arc::new(
            atrium_database::repositories::event::EventRepository::new(db_pool.clone()),
        );
        let upload_repo = Arc::new(
            atrium_database::repositories::upload::UploadRepository::new(db_pool.clone()),
        );
        let settings_repo = Arc::new(
            atrium_database::repositories::settings::SettingsRepository::new(db_pool.clone()),
        );
        let quote_repo = Arc::new(
            atrium_database::repositories::quote::QuoteRepository::new(db_pool.clone()),
        );
        let analytics_repo = Arc::new(
            atrium_database::repositories::analytics::AnalyticsRepository::new(db_pool.clone()),
        );
        let audit_repo = Arc::new(
            atrium_database::repositories::audit::AuditRepository::new(db_pool.clone()),
        );

        let password_hasher = Arc::new(atrium_auth::password::hasher::PasswordHasher::new());
        let password_validator = Arc::new(atrium_auth::password::validator::PasswordValidator::new(
            config.auth.password_min_length,
            config.auth.password_max_age_days,
        ));
        let jwt_encoder = Arc::new(atrium_auth::jwt::encoder::JwtEncoder::new(&config.auth));
        let jwt_decoder = Arc::new(atrium_auth::jwt::decoder::JwtDecoder::new(&config.auth));
        let session_guard = Arc::new(atrium_auth::session::guard::SessionGuard::new(
            session_repo.as_ref().clone(),
            &config.session,
        ));
        let permission_resolver = Arc::new(atrium_auth::permission::resolver::PermissionResolver::new(
            permission_repo.as_ref().clone(),
        ));

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

        let app_state = atrium_api::AppState {
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

        let router = atrium_api::router::build_router(app_state);

        Self {
            router,
            db_pool,
            config,
        }
    }

    /// Clean all mutable test data from the database (seeded roles and
    /// permissions are left in place).
    async fn clean_database(pool: &PgPool) {
        let tables = [
            "audit_entries",
            "analytics_views",
            "post_categories",
            "post_tags",
            "posts",
            "categories",
            "tags",
            "events",
            "uploads",
            "quotes",
            "settings",
            "sessions",
            "user_roles",
            "users",
        ];

        for table in &tables {
            let query = format!("DELETE FROM {}", table);
            let _ = sqlx::query(&query).execute(pool).await;
        }
    }

    /// Create a test user with the given role and return their ID
    pub async fn create_test_user(&self, email: &str, password: &str, role: &str) -> Uuid {
        let hasher = atrium_auth::password::hasher::PasswordHasher::new();
        let hash = hasher
            .hash_password(password)
            .expect("Failed to hash password");
        let id = Uuid::new_v4();

        sqlx::query(
            "INSERT INTO users (id, email, full_name, password_hash) VALUES ($1, $2, $3, $4)",
        )
        .bind(id)
        .bind(email)
        .bind(email)
        .bind(&hash)
        .execute(&self.db_pool)
        .await
        .expect("Failed to create test user");

        sqlx::query(
            "INSERT INTO user_roles (user_id, role_id) SELECT $1, id FROM roles WHERE name = $2",
        )
        .bind(id)
        .bind(role)
        .execute(&self.db_pool)
        .await
        .expect("Failed to assign role");

        id
    }

    /// Login and return JWT access token
    pub async fn login(&self, email: &str, password: &str) -> String {
        let body = serde_json::json!({
            "email": email,
            "password": password,
        });

        let response = self
            .request("POST", "/api/auth/login", Some(body), None)
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response.body["data"]["access_token"]
            .as_str()
            .expect("No access_token in login response")
            .to_string()
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}
