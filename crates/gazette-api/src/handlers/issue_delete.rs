//! Confirmed deletion of an issue record.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use gazette_core::AppError;
use serde::Deserialize;
use uuid::Uuid;

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct DeleteQuery {
    /// Explicit confirmation; the record is only removed when true
    #[serde(default)]
    pub confirm: bool,
}

#[utoipa::path(
    delete,
    path = "/api/v0/issues/{id}",
    tag = "issues",
    params(
        ("id" = Uuid, Path, description = "Issue ID"),
        DeleteQuery
    ),
    responses(
        (status = 204, description = "Issue removed (or was already absent)"),
        (status = 409, description = "Confirmation missing", body = ErrorResponse)
    )
)]
pub async fn delete_issue(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Query(query): Query<DeleteQuery>,
) -> Result<impl IntoResponse, HttpAppError> {
    // The confirmation gate is synchronous: nothing is removed without it.
    if !query.confirm {
        return Err(AppError::ConfirmationRequired.into());
    }

    let removed = state.store.remove(id).await?;
    if removed {
        tracing::info!(issue_id = %id, "Issue deleted");
    } else {
        // Absent ids are a no-op, not an error
        tracing::debug!(issue_id = %id, "Delete of unknown issue ignored");
    }

    Ok(StatusCode::NO_CONTENT)
}
