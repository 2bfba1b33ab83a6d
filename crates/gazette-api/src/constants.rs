//! API constants
//!
//! All routes are versioned under this prefix; handler path annotations and
//! route registration both use it.

/// Versioned API path prefix
pub const API_PREFIX: &str = "/api/v0";

/// Prefix of issued admin session tokens
pub const SESSION_TOKEN_PREFIX: &str = "gz_sess_";
