//! Gazette Core Library
//!
//! This crate provides the domain models, record-manager logic, error types,
//! and configuration shared across all Gazette components.

pub mod config;
pub mod error;
pub mod manager;
pub mod models;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use manager::{filter_issues, submit_batch, BatchOutcome, RejectedUpload, UploadCandidate};
pub use models::{IssueRecord, IssueResponse};

/// Exact media type accepted for uploads (after MIME parameter stripping).
pub const PDF_CONTENT_TYPE: &str = "application/pdf";
