//! Integration tests for the post publication workflow.

use axum::http::StatusCode;

use crate::helpers::TestApp;

async fn create_draft(app: &TestApp, token: &str, slug: &str) -> String {
    let response = app
        .request(
            "POST",
            "/api/posts",
            Some(serde_json::json!({
                "slug": slug,
                "title": "A draft",
                "body": "Body text",
            })),
            Some(token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    response.body["data"]["id"]
        .as_str()
        .expect("post id")
        .to_string()
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn test_author_submits_editor_publishes() {
    let app = TestApp::new().await;
    app.create_test_user("writer@test.com", "Passw0rd!", "author")
        .await;
    app.create_test_user("editor@test.com", "Passw0rd!", "editor")
        .await;

    let author_token = app.login("writer@test.com", "Passw0rd!").await;
    let editor_token = app.login("editor@test.com", "Passw0rd!").await;

    let post_id = create_draft(&app, &author_token, "first-post").await;

    let response = app
        .request(
            "POST",
            &format!("/api/posts/{}/submit-review", post_id),
            None,
            Some(&author_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["post"]["status"], "review");

    let response = app
        .request(
            "POST",
            &format!("/api/posts/{}/approve", post_id),
            None,
            Some(&editor_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["post"]["status"], "published");
    assert!(response.body["data"]["post"]["published_at"].is_string());
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn test_author_cannot_approve() {
    let app = TestApp::new().await;
    app.create_test_user("writer2@test.com", "Passw0rd!", "author")
        .await;

    let token = app.login("writer2@test.com", "Passw0rd!").await;
    let post_id = create_draft(&app, &token, "second-post").await;

    let response = app
        .request(
            "POST",
            &format!("/api/posts/{}/submit-review", post_id),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    // Authors hold no posts:approve grant.
    let response = app
        .request(
            "POST",
            &format!("/api/posts/{}/approve", post_id),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn test_reject_records_reason() {
    let app = TestApp::new().await;
    app.create_test_user("writer3@test.com", "Passw0rd!", "author")
        .await;
    app.create_test_user("editor3@test.com", "Passw0rd!", "editor")
        .await;

    let author_token = app.login("writer3@test.com", "Passw0rd!").await;
    let editor_token = app.login("editor3@test.com", "Passw0rd!").await;

    let post_id = create_draft(&app, &author_token, "third-post").await;
    app.request(
        "POST",
        &format!("/api/posts/{}/submit-review", post_id),
        None,
        Some(&author_token),
    )
    .await;

    let response = app
        .request(
            "POST",
            &format!("/api/posts/{}/reject", post_id),
            Some(serde_json::json!({ "reason": "Needs sources" })),
            Some(&editor_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["post"]["status"], "rejected");

    let reason: Option<String> = sqlx::query_scalar(
        "SELECT after_data->>'reason' FROM audit_entries \
         WHERE entity = 'post' AND action = 'reject' ORDER BY created_at DESC LIMIT 1",
    )
    .fetch_one(&app.db_pool)
    .await
    .expect("audit entry");
    assert_eq!(reason.as_deref(), Some("Needs sources"));
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn test_invalid_transition_rejected() {
    let app = TestApp::new().await;
    app.create_test_user("editor4@test.com", "Passw0rd!", "editor")
        .await;

    let token = app.login("editor4@test.com", "Passw0rd!").await;
    let post_id = create_draft(&app, &token, "fourth-post").await;

    // A draft cannot be approved without going through review.
    let response = app
        .request(
            "POST",
            &format!("/api/posts/{}/approve", post_id),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
