//! Admin login and logout.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use gazette_core::AppError;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::auth::middleware::{too_many_attempts, ClientKey};
use crate::auth::session::{generate_session_token, verify_password};
use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::state::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    /// Opaque session token; present it as `Authorization: Bearer <token>`
    pub token: String,
}

#[utoipa::path(
    post,
    path = "/api/v0/admin/login",
    tag = "admin",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Session token issued", body = LoginResponse),
        (status = 401, description = "Authentication failed", body = ErrorResponse),
        (status = 429, description = "Too many failed attempts")
    )
)]
pub async fn login(
    State(state): State<Arc<AppState>>,
    ClientKey(client): ClientKey,
    ValidatedJson(body): ValidatedJson<LoginRequest>,
) -> Result<Response, HttpAppError> {
    let limiter = &state.auth.failure_limiter;

    if limiter.is_blocked(&client).await {
        return Ok(too_many_attempts());
    }

    let verified = verify_password(&body.password, &state.auth.password_hash)?;
    if !verified {
        tracing::debug!(client = %client, "Admin login failed");
        if limiter.record_failure(&client).await {
            return Ok(too_many_attempts());
        }
        return Err(AppError::AuthenticationFailed.into());
    }

    limiter.clear(&client).await;

    let token = generate_session_token();
    state.auth.sessions.insert(token.clone()).await;
    tracing::info!(client = %client, "Admin session opened");

    Ok(Json(LoginResponse { token }).into_response())
}

#[utoipa::path(
    post,
    path = "/api/v0/admin/logout",
    tag = "admin",
    security(("session_token" = [])),
    responses(
        (status = 204, description = "Session revoked"),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    )
)]
pub async fn logout(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, HttpAppError> {
    // The middleware has already validated the token; revoke it here.
    let token = headers
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .ok_or_else(|| AppError::Unauthorized("Missing authorization header".to_string()))?;

    state.auth.sessions.revoke(token).await;
    tracing::info!("Admin session closed");

    Ok(StatusCode::NO_CONTENT)
}
