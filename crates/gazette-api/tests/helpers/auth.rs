//! Admin login helpers for integration tests.

#![allow(dead_code)]

use axum_test::TestServer;

pub const TEST_ADMIN_PASSWORD: &str = "wf-archive-test-secret";

/// Login with the test password and return the issued session token.
pub async fn login_admin(server: &TestServer) -> String {
    let response = server
        .post(&super::api_path("/admin/login"))
        .json(&serde_json::json!({ "password": TEST_ADMIN_PASSWORD }))
        .await;
    assert_eq!(response.status_code(), 200);

    let body: serde_json::Value = response.json();
    body.get("token")
        .and_then(|v| v.as_str())
        .expect("Expected 'token' in login response")
        .to_string()
}

/// Format a session token as a Bearer header value.
pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}
