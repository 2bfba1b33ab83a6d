//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Gazette API",
        version = "0.1.0",
        description = "Newspaper issue archive API (v0): upload PDF issue metadata, list and search the archive, and delete records. Admin operations require a session token from /api/v0/admin/login. All endpoints are versioned under /api/v0/."
    ),
    paths(
        // Issues (public surface)
        handlers::issue_upload::upload_issues,
        handlers::issue_get::list_issues,
        handlers::issue_get::get_issue,
        handlers::issue_delete::delete_issue,
        // Admin surface
        handlers::admin_auth::login,
        handlers::admin_auth::logout,
        handlers::issue_get::admin_list_issues,
    ),
    components(schemas(
        gazette_core::IssueResponse,
        gazette_core::manager::RejectedUpload,
        handlers::issue_upload::BatchUploadResponse,
        handlers::admin_auth::LoginRequest,
        handlers::admin_auth::LoginResponse,
        error::ErrorResponse,
    )),
    tags(
        (name = "issues", description = "Public archive operations"),
        (name = "admin", description = "Password-gated admin operations")
    )
)]
pub struct ApiDoc;

/// Returns the OpenAPI spec served at /api/openapi.json.
pub fn get_openapi_spec() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}
