//! Integration tests for the admin settings surface.

use axum::http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn test_delete_existing_key_removes_it() {
    let app = TestApp::new().await;
    app.create_test_user("settings-admin@test.com", "Passw0rd!", "admin")
        .await;
    let token = app.login("settings-admin@test.com", "Passw0rd!").await;

    let response = app
        .request(
            "PUT",
            "/api/settings/general",
            Some(serde_json::json!({ "site_name": "Atrium", "tagline": "News" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request("DELETE", "/api/settings/general/tagline", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request("GET", "/api/settings/general", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["document"]["site_name"], "Atrium");
    assert!(response.body["data"]["document"]["tagline"].is_null());
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn test_delete_absent_key_is_not_found() {
    let app = TestApp::new().await;
    app.create_test_user("settings-admin2@test.com", "Passw0rd!", "admin")
        .await;
    let token = app.login("settings-admin2@test.com", "Passw0rd!").await;

    let response = app
        .request(
            "PUT",
            "/api/settings/general",
            Some(serde_json::json!({ "site_name": "Atrium" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    // Key absent from an existing category.
    let response = app
        .request("DELETE", "/api/settings/general/tagline", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    // Category absent entirely.
    let response = app
        .request("DELETE", "/api/settings/missing/tagline", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    // The surviving document is untouched.
    let response = app
        .request("GET", "/api/settings/general", None, Some(&token))
        .await;
    assert_eq!(response.body["data"]["document"]["site_name"], "Atrium");
}
