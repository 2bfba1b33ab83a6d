//! Admin gate integration tests: login, logout, session enforcement,
//! and login throttling.
//!
//! Run with: `cargo test -p gazette-api --test admin_test`

mod helpers;

use helpers::auth::{bearer, login_admin, TEST_ADMIN_PASSWORD};
use helpers::fixtures::issue_form;
use helpers::{api_path, setup_test_app, setup_test_app_with_config, test_config};

#[tokio::test]
async fn test_login_with_wrong_password_fails() {
    let server = setup_test_app().await;

    let response = server
        .post(&api_path("/admin/login"))
        .json(&serde_json::json!({ "password": "not-the-password" }))
        .await;
    assert_eq!(response.status_code(), 401);

    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "AUTHENTICATION_FAILED");
}

#[tokio::test]
async fn test_login_issues_session_token() {
    let server = setup_test_app().await;

    let token = login_admin(&server).await;
    assert!(token.starts_with("gz_sess_"));

    // A second login issues a distinct token; both stay valid
    let second = login_admin(&server).await;
    assert_ne!(token, second);

    let response = server
        .get(&api_path("/admin/issues"))
        .add_header("Authorization", bearer(&token))
        .await;
    assert_eq!(response.status_code(), 200);
}

#[tokio::test]
async fn test_admin_routes_require_session_token() {
    let server = setup_test_app().await;

    let response = server.get(&api_path("/admin/issues")).await;
    assert_eq!(response.status_code(), 401);
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "UNAUTHORIZED");

    let response = server
        .get(&api_path("/admin/issues"))
        .add_header("Authorization", bearer("gz_sess_0000000000000000000000000000000000000000"))
        .await;
    assert_eq!(response.status_code(), 401);

    // Malformed header (not Bearer)
    let response = server
        .get(&api_path("/admin/issues"))
        .add_header("Authorization", "Basic abc123")
        .await;
    assert_eq!(response.status_code(), 401);
}

#[tokio::test]
async fn test_logout_revokes_session() {
    let server = setup_test_app().await;
    let token = login_admin(&server).await;

    let response = server
        .post(&api_path("/admin/logout"))
        .add_header("Authorization", bearer(&token))
        .await;
    assert_eq!(response.status_code(), 204);

    let response = server
        .get(&api_path("/admin/issues"))
        .add_header("Authorization", bearer(&token))
        .await;
    assert_eq!(response.status_code(), 401);
}

#[tokio::test]
async fn test_admin_upload_and_delete() {
    let server = setup_test_app().await;
    let token = login_admin(&server).await;

    let form = issue_form("2024-06-01", &[("issue.pdf", "application/pdf", 2048)]);
    let response = server
        .post(&api_path("/admin/issues"))
        .add_header("Authorization", bearer(&token))
        .multipart(form)
        .await;
    assert_eq!(response.status_code(), 200);
    let body: serde_json::Value = response.json();
    let id = body["accepted"][0]["id"].as_str().expect("id").to_string();

    // Both surfaces see the same archive
    let public: serde_json::Value = server.get(&api_path("/issues")).await.json();
    assert_eq!(public.as_array().expect("array").len(), 1);

    // Deletion through the admin surface still needs confirmation
    let response = server
        .delete(&api_path(&format!("/admin/issues/{}", id)))
        .add_header("Authorization", bearer(&token))
        .await;
    assert_eq!(response.status_code(), 409);

    let response = server
        .delete(&api_path(&format!("/admin/issues/{}", id)))
        .add_header("Authorization", bearer(&token))
        .add_query_param("confirm", "true")
        .await;
    assert_eq!(response.status_code(), 204);

    let public: serde_json::Value = server.get(&api_path("/issues")).await.json();
    assert!(public.as_array().expect("array").is_empty());
}

#[tokio::test]
async fn test_admin_listing_has_no_search_parameter() {
    let server = setup_test_app().await;
    let token = login_admin(&server).await;

    let form = issue_form(
        "2024-06-01",
        &[
            ("a.pdf", "application/pdf", 1024),
            ("b.pdf", "application/pdf", 1024),
        ],
    );
    server.post(&api_path("/issues")).multipart(form).await;

    // A q parameter is ignored; the admin surface always lists everything
    let list: serde_json::Value = server
        .get(&api_path("/admin/issues"))
        .add_query_param("q", "a.pdf")
        .add_header("Authorization", bearer(&token))
        .await
        .json();
    assert_eq!(list.as_array().expect("array").len(), 2);
}

#[tokio::test]
async fn test_login_throttled_after_repeated_failures() {
    let mut config = test_config();
    config.auth_max_failures = 2;
    let server = setup_test_app_with_config(config).await;

    let wrong = serde_json::json!({ "password": "wrong" });

    let response = server.post(&api_path("/admin/login")).json(&wrong).await;
    assert_eq!(response.status_code(), 401);

    let response = server.post(&api_path("/admin/login")).json(&wrong).await;
    assert_eq!(response.status_code(), 429);

    // Even the correct password is blocked while throttled
    let response = server
        .post(&api_path("/admin/login"))
        .json(&serde_json::json!({ "password": TEST_ADMIN_PASSWORD }))
        .await;
    assert_eq!(response.status_code(), 429);
}

#[tokio::test]
async fn test_throttle_is_per_client() {
    let mut config = test_config();
    config.auth_max_failures = 2;
    let server = setup_test_app_with_config(config).await;

    let wrong = serde_json::json!({ "password": "wrong" });
    for _ in 0..2 {
        server
            .post(&api_path("/admin/login"))
            .add_header("X-Forwarded-For", "10.0.0.1")
            .json(&wrong)
            .await;
    }

    let blocked = server
        .post(&api_path("/admin/login"))
        .add_header("X-Forwarded-For", "10.0.0.1")
        .json(&serde_json::json!({ "password": TEST_ADMIN_PASSWORD }))
        .await;
    assert_eq!(blocked.status_code(), 429);

    let other = server
        .post(&api_path("/admin/login"))
        .add_header("X-Forwarded-For", "10.0.0.2")
        .json(&serde_json::json!({ "password": TEST_ADMIN_PASSWORD }))
        .await;
    assert_eq!(other.status_code(), 200);
}
