//! Route configuration and setup

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method, StatusCode},
    response::IntoResponse,
    routing::{delete, get, post},
    Json, Router,
};
use gazette_core::Config;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::constants::API_PREFIX;
use crate::handlers;
use crate::state::AppState;

/// Extra room for multipart framing and text parts on top of the file limit.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Cap on concurrent in-flight requests.
const HTTP_CONCURRENCY_LIMIT: usize = 512;

/// Setup all application routes
pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Result<Router<()>, anyhow::Error> {
    let cors = setup_cors(config)?;

    // Public routes (no authentication required)
    let public_routes = public_routes(state.clone());

    // Admin routes behind the session middleware
    let admin_routes = admin_routes(state.clone()).layer(axum::middleware::from_fn_with_state(
        state.auth.clone(),
        crate::auth::middleware::admin_auth_middleware,
    ));

    let app = public_routes
        .merge(admin_routes)
        .nest(
            "/docs",
            utoipa_rapidoc::RapiDoc::new("/api/openapi.json")
                .path("/docs")
                .into(),
        )
        .layer(ConcurrencyLimitLayer::new(HTTP_CONCURRENCY_LIMIT))
        // RequestBodyLimitLayer below is the real cap; axum's built-in 2 MB
        // default would otherwise reject large multipart bodies first.
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(
            config.max_file_size_bytes + MULTIPART_OVERHEAD_BYTES,
        ))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(app)
}

/// Setup CORS configuration
fn setup_cors(config: &Config) -> Result<CorsLayer, anyhow::Error> {
    let cors = if config.cors_origins.contains(&"*".to_string()) {
        tracing::warn!("CORS configured to allow all origins - not recommended for production");
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
            .allow_headers(Any)
    } else {
        let origins: Result<Vec<HeaderValue>, _> =
            config.cors_origins.iter().map(|o| o.parse()).collect();

        CorsLayer::new()
            .allow_origin(origins.unwrap_or_default())
            .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
            .allow_headers(Any)
    };
    Ok(cors)
}

/// Public surface: archive operations plus health and docs.
fn public_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health_check))
        .route("/live", get(liveness_check))
        .route(
            "/api/openapi.json",
            get(|| async { Json(crate::api_doc::get_openapi_spec()) }),
        )
        .route(
            &format!("{}/issues", API_PREFIX),
            post(handlers::issue_upload::upload_issues).get(handlers::issue_get::list_issues),
        )
        .route(
            &format!("{}/issues/{{id}}", API_PREFIX),
            get(handlers::issue_get::get_issue).delete(handlers::issue_delete::delete_issue),
        )
        .route(
            &format!("{}/admin/login", API_PREFIX),
            post(handlers::admin_auth::login),
        )
        .with_state(state)
}

/// Admin surface: same record manager, session-gated, no search parameter.
fn admin_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route(
            &format!("{}/admin/logout", API_PREFIX),
            post(handlers::admin_auth::logout),
        )
        .route(
            &format!("{}/admin/issues", API_PREFIX),
            post(handlers::issue_upload::upload_issues).get(handlers::issue_get::admin_list_issues),
        )
        .route(
            &format!("{}/admin/issues/{{id}}", API_PREFIX),
            delete(handlers::issue_delete::delete_issue),
        )
        .with_state(state)
}

#[derive(serde::Serialize)]
struct HealthCheckResponse {
    status: String,
    records: usize,
}

/// Liveness probe - simple check that process is running
async fn liveness_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "status": "alive"
        })),
    )
}

/// Health check - reports the store's record count.
async fn health_check(
    axum::extract::State(state): axum::extract::State<Arc<AppState>>,
) -> impl IntoResponse {
    match state.store.count().await {
        Ok(records) => (
            StatusCode::OK,
            Json(HealthCheckResponse {
                status: "healthy".to_string(),
                records,
            }),
        ),
        Err(e) => {
            tracing::error!(error = %e, "Store health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthCheckResponse {
                    status: format!("unhealthy: {}", e),
                    records: 0,
                }),
            )
        }
    }
}
