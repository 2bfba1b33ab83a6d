//! Listing, searching, and viewing archived issues.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use gazette_core::{filter_issues, AppError, IssueResponse};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct SearchQuery {
    /// Free-text query: case-insensitive filename match or publish-date match
    #[serde(default)]
    pub q: String,
}

#[utoipa::path(
    get,
    path = "/api/v0/issues",
    tag = "issues",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching issues in insertion order", body = Vec<IssueResponse>)
    )
)]
pub async fn list_issues(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> Result<impl IntoResponse, HttpAppError> {
    let records = state.store.list().await?;
    let matched = filter_issues(&records, &query.q);

    tracing::debug!(query = %query.q, total = records.len(), matched = matched.len(), "Issue search");

    let response: Vec<IssueResponse> = matched.into_iter().map(IssueResponse::from).collect();
    Ok(Json(response))
}

/// Admin variant of the listing: the whole archive, no search parameter.
#[utoipa::path(
    get,
    path = "/api/v0/admin/issues",
    tag = "admin",
    security(("session_token" = [])),
    responses(
        (status = 200, description = "All issues in insertion order", body = Vec<IssueResponse>),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    )
)]
pub async fn admin_list_issues(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpAppError> {
    let records = state.store.list().await?;
    let response: Vec<IssueResponse> = records.into_iter().map(IssueResponse::from).collect();
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/v0/issues/{id}",
    tag = "issues",
    params(
        ("id" = Uuid, Path, description = "Issue ID")
    ),
    responses(
        (status = 200, description = "Issue found", body = IssueResponse),
        (status = 404, description = "Issue not found", body = ErrorResponse)
    )
)]
pub async fn get_issue(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpAppError> {
    let record = state
        .store
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Issue not found".to_string()))?;

    Ok(Json(IssueResponse::from(record)))
}
