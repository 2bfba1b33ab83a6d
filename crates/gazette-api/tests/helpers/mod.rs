//! Test helpers: build AppState and router for integration tests.
//!
//! Run from workspace root: `cargo test -p gazette-api --test issues_test` or
//! `cargo test -p gazette-api`. Everything runs in memory; no external
//! services are needed.

pub mod auth;
pub mod fixtures;

use axum_test::TestServer;
use gazette_api::constants;
use gazette_api::setup;
use gazette_core::Config;

/// API path prefix for tests (e.g. `/api/v0`).
pub fn api_path(path: &str) -> String {
    format!("{}{}", constants::API_PREFIX, path)
}

/// Default test configuration: wildcard CORS, plaintext admin password
/// (hashed at startup), 5 MB file limit.
pub fn test_config() -> Config {
    Config {
        server_port: 0,
        environment: "test".to_string(),
        cors_origins: vec!["*".to_string()],
        max_file_size_bytes: 5 * 1024 * 1024,
        admin_password_hash: None,
        admin_password: Some(auth::TEST_ADMIN_PASSWORD.to_string()),
        auth_max_failures: 5,
        auth_failure_window_secs: 300,
    }
}

/// Setup test server with the default configuration.
pub async fn setup_test_app() -> TestServer {
    setup_test_app_with_config(test_config()).await
}

/// Setup test server with a custom configuration.
pub async fn setup_test_app_with_config(config: Config) -> TestServer {
    let state = setup::build_state(config).expect("Failed to build test state");
    let router =
        setup::routes::setup_routes(&state.config, state.clone()).expect("Failed to build router");
    TestServer::new(router).expect("Failed to start test server")
}
