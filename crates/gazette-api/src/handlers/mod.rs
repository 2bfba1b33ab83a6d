//! HTTP request handlers

pub mod admin_auth;
pub mod issue_delete;
pub mod issue_get;
pub mod issue_upload;
