//! Record-manager logic
//!
//! Pure functions implementing the upload/list/search/delete workflow shared
//! by the public and admin surfaces. Batch submission validates the publish
//! date precondition and each candidate's declared media type; filtering is a
//! stable, read-only substring match. No I/O happens here - storage is the
//! caller's concern.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppError;
use crate::models::IssueRecord;
use crate::PDF_CONTENT_TYPE;

/// Declared metadata of one file in an upload batch. The file bytes are
/// already discarded by the time a candidate reaches the manager.
#[derive(Debug, Clone)]
pub struct UploadCandidate {
    pub filename: String,
    pub content_type: String,
    pub size_bytes: i64,
}

/// A file rejected during batch submission, with its per-file reason.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RejectedUpload {
    pub filename: String,
    /// Machine-readable rejection reason, e.g. "UNSUPPORTED_FILE_TYPE"
    pub reason: String,
    pub message: String,
}

/// Outcome of one batch submission: accepted records in input order plus
/// per-file rejections. One invalid file never blocks the valid ones.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub accepted: Vec<IssueRecord>,
    pub rejected: Vec<RejectedUpload>,
}

/// Strip MIME parameters and normalize case, e.g.
/// "Application/PDF; charset=binary" -> "application/pdf".
fn normalize_content_type(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_lowercase()
}

/// Validate a batch of upload candidates against the publish-date
/// precondition and the PDF-only type rule, and synthesize issue records for
/// the accepted files.
///
/// The whole batch shares one publish date; when it is absent the batch is
/// rejected wholesale with `MissingPublishDate` and no records are created.
/// Type checking is per-file: non-PDF candidates land in `rejected` while the
/// rest of the batch proceeds. Accepted records preserve input order.
pub fn submit_batch(
    candidates: &[UploadCandidate],
    publish_date: Option<NaiveDate>,
    now: DateTime<Utc>,
) -> Result<BatchOutcome, AppError> {
    let publish_date = publish_date.ok_or(AppError::MissingPublishDate)?;

    let mut outcome = BatchOutcome::default();
    for candidate in candidates {
        if normalize_content_type(&candidate.content_type) == PDF_CONTENT_TYPE {
            outcome.accepted.push(IssueRecord::new(
                candidate.filename.clone(),
                candidate.size_bytes,
                publish_date,
                now,
            ));
        } else {
            let err = AppError::UnsupportedFileType {
                filename: candidate.filename.clone(),
                content_type: candidate.content_type.clone(),
            };
            outcome.rejected.push(RejectedUpload {
                filename: candidate.filename.clone(),
                reason: crate::error::ErrorMetadata::error_code(&err).to_string(),
                message: crate::error::ErrorMetadata::client_message(&err),
            });
        }
    }

    Ok(outcome)
}

/// Stable filter over the archive. A record matches when `query` is a
/// case-insensitive substring of its filename, or an exact-case substring of
/// its ISO publish date. The empty query matches everything. Never mutates
/// or reorders the input.
pub fn filter_issues(records: &[IssueRecord], query: &str) -> Vec<IssueRecord> {
    if query.is_empty() {
        return records.to_vec();
    }

    let query_lower = query.to_lowercase();
    records
        .iter()
        .filter(|record| {
            record.filename.to_lowercase().contains(&query_lower)
                || record.title().contains(query)
        })
        .cloned()
        .collect()
}
