/**
 * Fetch Code Handler
 *
 * This module implements the credentialed code fetch handler for
 * GET /api/projects/{projectName}/{pjpassword}.
 *
 * Unlike every other project route, this one requires no bearer token: the
 * project password in the path is the whole credential. Anyone holding the
 * project name and password can read the code without an account.
 */

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use bcrypt::verify;
use sqlx::SqlitePool;

use crate::backend::error::BackendError;
use crate::backend::projects::db::find_project_by_name;
use crate::backend::projects::handlers::types::CodeResponse;

/// Fetch code handler
///
/// # Arguments
///
/// * `State(pool)` - Database connection pool
/// * `Path((project_name, pjpassword))` - Project name and password from the URL
///
/// # Returns
///
/// `200 OK` with `{"code": ...}`
///
/// # Errors
///
/// * `404 Not Found` - If no project with this name exists
/// * `401 Unauthorized` - If the project password is wrong
/// * `503 Service Unavailable` - If database is not configured
/// * `500 Internal Server Error` - If the lookup or verification fails
pub async fn fetch_code(
    State(pool): State<Option<SqlitePool>>,
    Path((project_name, pjpassword)): Path<(String, String)>,
) -> Result<Json<CodeResponse>, BackendError> {
    let pool = pool.ok_or_else(|| {
        tracing::error!("Database not configured");
        BackendError::handler(StatusCode::SERVICE_UNAVAILABLE, "Database not configured")
    })?;
    tracing::info!("Fetch code request for: {}", project_name);

    // Find the project by name
    let project = find_project_by_name(&pool, &project_name)
        .await
        .map_err(|e| {
            tracing::error!("Database error: {:?}", e);
            BackendError::handler(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch project code",
            )
        })?
        .ok_or_else(|| {
            tracing::warn!("Project not found: {}", project_name);
            BackendError::handler(StatusCode::NOT_FOUND, "Project not found")
        })?;

    // Verify the project password
    let valid = verify(&pjpassword, &project.password_hash).map_err(|e| {
        tracing::error!("Password verification error: {:?}", e);
        BackendError::handler(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to fetch project code",
        )
    })?;

    if !valid {
        tracing::warn!("Invalid project credentials for: {}", project_name);
        return Err(BackendError::handler(
            StatusCode::UNAUTHORIZED,
            "Invalid project credentials",
        ));
    }

    Ok(Json(CodeResponse { code: project.code }))
}
