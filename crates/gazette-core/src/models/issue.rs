use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

const BYTES_PER_MB: f64 = 1_048_576.0;

/// One archived newspaper issue. Records only metadata about the uploaded
/// PDF; the file bytes themselves are never stored. Immutable after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueRecord {
    pub id: Uuid,
    pub filename: String,
    pub size_bytes: i64,
    pub uploaded_at: DateTime<Utc>,
    pub publish_date: NaiveDate,
}

impl IssueRecord {
    pub fn new(
        filename: String,
        size_bytes: i64,
        publish_date: NaiveDate,
        uploaded_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            filename,
            size_bytes,
            uploaded_at,
            publish_date,
        }
    }

    /// Human-readable size: byte length over 1,048,576, one decimal place, "MB" suffix.
    pub fn size_label(&self) -> String {
        format!("{:.1}MB", self.size_bytes as f64 / BYTES_PER_MB)
    }

    /// The publish date is the issue's display title.
    pub fn title(&self) -> String {
        self.publish_date.format("%Y-%m-%d").to_string()
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct IssueResponse {
    pub id: Uuid,
    pub filename: String,
    pub size_bytes: i64,
    /// Human-readable size, e.g. "2.5MB"
    pub size_label: String,
    pub uploaded_at: DateTime<Utc>,
    pub publish_date: NaiveDate,
    /// Display title (the publish date)
    pub title: String,
}

impl From<IssueRecord> for IssueResponse {
    fn from(record: IssueRecord) -> Self {
        let size_label = record.size_label();
        let title = record.title();
        IssueResponse {
            id: record.id,
            filename: record.filename,
            size_bytes: record.size_bytes,
            size_label,
            uploaded_at: record.uploaded_at,
            publish_date: record.publish_date,
            title,
        }
    }
}
