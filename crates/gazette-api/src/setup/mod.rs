//! Application setup and initialization
//!
//! This module contains all application initialization logic extracted from
//! main.rs for better organization and testability.

pub mod routes;
pub mod server;

pub use crate::telemetry::init_telemetry;

use std::sync::Arc;

use anyhow::{Context, Result};
use gazette_core::Config;
use gazette_store::MemoryIssueStore;

use crate::auth::middleware::{AuthFailureLimiter, AuthState};
use crate::auth::session::{hash_password, SessionStore};
use crate::state::{AppState, UploadConfig};

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    // Validate configuration first - fail fast on misconfiguration
    config
        .validate()
        .context("Configuration validation failed")?;

    let state = build_state(config)?;
    let router = routes::setup_routes(&state.config, state.clone())?;

    Ok((state, router))
}

/// Assemble AppState with the in-memory store and admin auth state.
pub fn build_state(config: Config) -> Result<Arc<AppState>> {
    let password_hash = match (&config.admin_password_hash, &config.admin_password) {
        (Some(hash), _) => hash.clone(),
        (None, Some(plain)) => {
            tracing::warn!("ADMIN_PASSWORD set in plaintext; hashing at startup");
            hash_password(plain).map_err(|e| anyhow::anyhow!("{}", e))?
        }
        (None, None) => {
            return Err(anyhow::anyhow!(
                "Either ADMIN_PASSWORD_HASH or ADMIN_PASSWORD must be set"
            ))
        }
    };

    let auth = Arc::new(AuthState {
        password_hash,
        sessions: SessionStore::new(),
        failure_limiter: AuthFailureLimiter::new(
            config.auth_max_failures,
            config.auth_failure_window_secs,
        ),
    });

    Ok(Arc::new(AppState {
        store: Arc::new(MemoryIssueStore::new()),
        upload: UploadConfig {
            max_file_size: config.max_file_size_bytes,
        },
        auth,
        config,
    }))
}
