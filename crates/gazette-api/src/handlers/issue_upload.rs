//! Batch upload of newspaper issues.
//!
//! One multipart request carries a `publish_date` text part and any number of
//! `file` parts. File bytes are drained for their length only; just the
//! declared metadata is kept. The response reports the outcome per file so
//! the caller can surface one notice per accepted and per rejected upload.

use std::sync::Arc;

use axum::{extract::Multipart, extract::State, response::IntoResponse, Json};
use chrono::{NaiveDate, Utc};
use gazette_core::{
    manager::{submit_batch, RejectedUpload, UploadCandidate},
    AppError, ErrorMetadata, IssueResponse,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct BatchUploadResponse {
    /// Records created, in input order
    pub accepted: Vec<IssueResponse>,
    /// Files skipped, each with its reason
    pub rejected: Vec<RejectedUpload>,
}

/// One parsed multipart part we care about.
struct ParsedBatch {
    publish_date: Option<NaiveDate>,
    candidates: Vec<UploadCandidate>,
    oversized: Vec<RejectedUpload>,
}

async fn parse_batch(
    mut multipart: Multipart,
    max_file_size: usize,
) -> Result<ParsedBatch, AppError> {
    let mut batch = ParsedBatch {
        publish_date: None,
        candidates: Vec::new(),
        oversized: Vec::new(),
    };

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidInput(format!("Failed to read multipart: {}", e)))?
    {
        let field_name = field.name().map(|s| s.to_string()).unwrap_or_default();

        match field_name.as_str() {
            "publish_date" => {
                let text = field.text().await.map_err(|e| {
                    AppError::InvalidInput(format!("Failed to read publish_date: {}", e))
                })?;
                let text = text.trim().to_string();
                if !text.is_empty() {
                    let date = NaiveDate::parse_from_str(&text, "%Y-%m-%d").map_err(|_| {
                        AppError::InvalidInput(format!(
                            "Invalid publish_date '{}': expected YYYY-MM-DD",
                            text
                        ))
                    })?;
                    batch.publish_date = Some(date);
                }
            }
            "file" => {
                let filename = field
                    .file_name()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "unknown".to_string());
                let content_type = field
                    .content_type()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "application/octet-stream".to_string());

                // Only the byte length is kept; the content is discarded.
                let data = field.bytes().await.map_err(|e| {
                    AppError::InvalidInput(format!("Failed to read file data: {}", e))
                })?;

                if data.len() > max_file_size {
                    let err = AppError::PayloadTooLarge(format!(
                        "'{}' exceeds maximum allowed size of {} MB",
                        filename,
                        max_file_size / 1024 / 1024
                    ));
                    batch.oversized.push(RejectedUpload {
                        filename,
                        reason: err.error_code().to_string(),
                        message: err.client_message(),
                    });
                    continue;
                }

                batch.candidates.push(UploadCandidate {
                    filename,
                    content_type,
                    size_bytes: data.len() as i64,
                });
            }
            _ => {
                // Unknown parts are drained and ignored
                let _ = field.bytes().await;
            }
        }
    }

    Ok(batch)
}

#[utoipa::path(
    post,
    path = "/api/v0/issues",
    tag = "issues",
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Batch processed; per-file outcome in body", body = BatchUploadResponse),
        (status = 400, description = "Missing publish date or malformed batch", body = ErrorResponse),
        (status = 413, description = "Request body too large", body = ErrorResponse)
    )
)]
pub async fn upload_issues(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<impl IntoResponse, HttpAppError> {
    let batch = parse_batch(multipart, state.upload.max_file_size).await?;

    // The publish-date precondition applies to the whole batch and is checked
    // before any file outcome is reported.
    let outcome = submit_batch(&batch.candidates, batch.publish_date, Utc::now())?;

    if batch.candidates.is_empty() && batch.oversized.is_empty() {
        return Err(AppError::InvalidInput("No file provided".to_string()).into());
    }

    for record in &outcome.accepted {
        state.store.append(record.clone()).await?;
        tracing::info!(
            issue_id = %record.id,
            filename = %record.filename,
            publish_date = %record.publish_date,
            size = %record.size_label(),
            "Issue uploaded"
        );
    }
    for rejected in outcome.rejected.iter().chain(batch.oversized.iter()) {
        tracing::debug!(
            filename = %rejected.filename,
            reason = %rejected.reason,
            "Upload rejected"
        );
    }

    let mut rejected = outcome.rejected;
    rejected.extend(batch.oversized);

    Ok(Json(BatchUploadResponse {
        accepted: outcome.accepted.into_iter().map(IssueResponse::from).collect(),
        rejected,
    }))
}
