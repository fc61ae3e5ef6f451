//! Integration tests for the authentication flow.

use axum::http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn test_login_success() {
    let app = TestApp::new().await;
    app.create_test_user("author@test.com", "Passw0rd!", "author")
        .await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "author@test.com",
                "password": "Passw0rd!",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["data"]["access_token"].is_string());
    assert_eq!(response.body["data"]["roles"][0], "author");
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn test_login_invalid_password() {
    let app = TestApp::new().await;
    app.create_test_user("author2@test.com", "Passw0rd!", "author")
        .await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "author2@test.com",
                "password": "WrongPassw0rd!",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn test_login_nonexistent_user() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "nobody@test.com",
                "password": "Passw0rd!",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn test_me_authenticated() {
    let app = TestApp::new().await;
    app.create_test_user("me@test.com", "Passw0rd!", "admin")
        .await;
    let token = app.login("me@test.com", "Passw0rd!").await;

    let response = app.request("GET", "/api/auth/me", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["email"], "me@test.com");
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn test_me_without_token() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/auth/me", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn test_logout_invalidates_session() {
    let app = TestApp::new().await;
    app.create_test_user("out@test.com", "Passw0rd!", "admin")
        .await;
    let token = app.login("out@test.com", "Passw0rd!").await;

    let response = app
        .request("POST", "/api/auth/logout", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app.request("GET", "/api/auth/me", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
