//! Admin session middleware and login throttling.

use std::collections::HashMap;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    extract::{ConnectInfo, FromRequestParts, Request, State},
    http::request::Parts,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use gazette_core::AppError;
use tokio::sync::Mutex;

use crate::auth::session::SessionStore;
use crate::error::HttpAppError;

/// Tracks failed login attempts per client within a sliding window.
#[derive(Clone)]
pub struct AuthFailureLimiter {
    inner: Arc<Mutex<HashMap<String, (u32, Instant)>>>,
    max_failures: u32,
    window: Duration,
}

impl AuthFailureLimiter {
    pub fn new(max_failures: u32, window_seconds: u64) -> Self {
        Self {
            inner: Arc::new(Mutex::new(HashMap::new())),
            max_failures,
            window: Duration::from_secs(window_seconds),
        }
    }

    pub async fn record_failure(&self, client: &str) -> bool {
        let mut guard = self.inner.lock().await;
        let now = Instant::now();
        let (count, reset_at) = guard
            .entry(client.to_string())
            .or_insert((0, now + self.window));
        if now >= *reset_at {
            *count = 0;
            *reset_at = now + self.window;
        }
        *count += 1;
        *count >= self.max_failures
    }

    pub async fn is_blocked(&self, client: &str) -> bool {
        let mut guard = self.inner.lock().await;
        if let Some((count, reset_at)) = guard.get(client) {
            if Instant::now() >= *reset_at {
                guard.remove(client);
                return false;
            }
            return *count >= self.max_failures;
        }
        false
    }

    pub async fn clear(&self, client: &str) {
        self.inner.lock().await.remove(client);
    }
}

/// State for the admin gate: the verified secret hash, issued sessions, and
/// the login throttle.
#[derive(Clone)]
pub struct AuthState {
    pub password_hash: String,
    pub sessions: SessionStore,
    pub failure_limiter: AuthFailureLimiter,
}

/// Best-effort client identity for throttling. Takes the first
/// X-Forwarded-For entry when present, then the peer address, so
/// direct-connection deployments do not collapse into one shared bucket.
pub fn client_key(headers: &axum::http::HeaderMap, peer: Option<SocketAddr>) -> String {
    if let Some(first) = headers
        .get("x-forwarded-for")
        .and_then(|h| h.to_str().ok())
        .and_then(|v| v.split(',').map(str::trim).find(|s| !s.is_empty()))
    {
        return first.to_string();
    }
    if let Some(addr) = peer {
        return addr.ip().to_string();
    }
    "unknown".to_string()
}

/// Extractor for the throttle identity. The peer address comes from
/// `ConnectInfo`, available when the server is started with
/// `into_make_service_with_connect_info`.
pub struct ClientKey(pub String);

impl<S> FromRequestParts<S> for ClientKey
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let peer = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| *addr);
        Ok(ClientKey(client_key(&parts.headers, peer)))
    }
}

/// Guard for the admin surface: requires a Bearer session token issued by a
/// prior login and not yet revoked.
pub async fn admin_auth_middleware(
    State(auth_state): State<Arc<AuthState>>,
    request: Request,
    next: Next,
) -> Response {
    let auth_header = match request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
    {
        Some(h) => h,
        None => {
            tracing::debug!("Admin request without authorization header");
            return HttpAppError(AppError::Unauthorized(
                "Missing authorization header".to_string(),
            ))
            .into_response();
        }
    };

    if !auth_header.starts_with("Bearer ") {
        return HttpAppError(AppError::Unauthorized(
            "Invalid authorization header format".to_string(),
        ))
        .into_response();
    }

    let token = &auth_header[7..]; // Remove "Bearer " prefix
    if !auth_state.sessions.contains(token).await {
        tracing::debug!("Admin request with unknown or revoked session token");
        return HttpAppError(AppError::Unauthorized(
            "Invalid or revoked session token".to_string(),
        ))
        .into_response();
    }

    next.run(request).await
}

/// Response for throttled login attempts.
pub fn too_many_attempts() -> Response {
    (StatusCode::TOO_MANY_REQUESTS, "Too many failed login attempts").into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_limiter_blocks_after_max_failures() {
        let limiter = AuthFailureLimiter::new(3, 60);

        assert!(!limiter.is_blocked("10.0.0.1").await);
        assert!(!limiter.record_failure("10.0.0.1").await);
        assert!(!limiter.record_failure("10.0.0.1").await);
        assert!(limiter.record_failure("10.0.0.1").await);
        assert!(limiter.is_blocked("10.0.0.1").await);
    }

    #[tokio::test]
    async fn test_limiter_is_per_client() {
        let limiter = AuthFailureLimiter::new(2, 60);

        limiter.record_failure("10.0.0.1").await;
        limiter.record_failure("10.0.0.1").await;
        assert!(limiter.is_blocked("10.0.0.1").await);
        assert!(!limiter.is_blocked("10.0.0.2").await);
    }

    #[test]
    fn test_client_key_prefers_forwarded_header() {
        let mut headers = axum::http::HeaderMap::new();
        headers.insert("x-forwarded-for", "203.0.113.9, 10.0.0.1".parse().unwrap());
        let peer = SocketAddr::from(([127, 0, 0, 1], 4000));

        assert_eq!(client_key(&headers, Some(peer)), "203.0.113.9");
    }

    #[test]
    fn test_client_key_falls_back_to_peer_address() {
        let headers = axum::http::HeaderMap::new();
        let peer = SocketAddr::from(([192, 168, 1, 7], 55310));

        assert_eq!(client_key(&headers, Some(peer)), "192.168.1.7");
        assert_eq!(client_key(&headers, None), "unknown");
    }

    #[tokio::test]
    async fn test_clear_resets_failures() {
        let limiter = AuthFailureLimiter::new(2, 60);

        limiter.record_failure("10.0.0.1").await;
        limiter.record_failure("10.0.0.1").await;
        limiter.clear("10.0.0.1").await;
        assert!(!limiter.is_blocked("10.0.0.1").await);
    }
}
