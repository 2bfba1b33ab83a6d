//! Application state
//!
//! AppState aggregates the issue store, upload limits, and admin auth state.
//! Handlers receive it as `State<Arc<AppState>>`; the admin middleware gets
//! its own `Arc<AuthState>` handle.

use std::sync::Arc;

use gazette_core::Config;
use gazette_store::IssueStore;

use crate::auth::middleware::AuthState;

/// Upload limits applied per file in a batch.
#[derive(Clone, Debug)]
pub struct UploadConfig {
    pub max_file_size: usize,
}

/// Main application state shared by the public and admin surfaces.
pub struct AppState {
    pub store: Arc<dyn IssueStore>,
    pub upload: UploadConfig,
    pub auth: Arc<AuthState>,
    pub config: Config,
}

fn _assert_app_state_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}
    assert_send::<AppState>();
    assert_sync::<AppState>();
}
