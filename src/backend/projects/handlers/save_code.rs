/**
 * Save Code Handler
 *
 * This module implements the code save handler for POST /api/projects/saveCode.
 *
 * The handler replaces the project's entire code document with the submitted
 * one. There is no merging and no version check; the last save wins. An
 * empty code document is rejected the same way as a missing one.
 */

use axum::{extract::State, http::StatusCode, response::Json};
use sqlx::SqlitePool;

use crate::backend::error::BackendError;
use crate::backend::projects::db::{find_project_by_name, update_project_code};
use crate::backend::projects::handlers::types::{non_empty, MessageResponse, SaveCodeRequest};

/// Save code handler
///
/// # Arguments
///
/// * `State(pool)` - Database connection pool
/// * `Json(request)` - Save request containing project name and code
///
/// # Returns
///
/// `200 OK` with `{"message": "Code saved successfully"}`
///
/// # Errors
///
/// * `400 Bad Request` - If project name or code is missing or empty
/// * `404 Not Found` - If no project with this name exists
/// * `503 Service Unavailable` - If database is not configured
/// * `500 Internal Server Error` - If the lookup or update fails
pub async fn save_code(
    State(pool): State<Option<SqlitePool>>,
    Json(request): Json<SaveCodeRequest>,
) -> Result<Json<MessageResponse>, BackendError> {
    let pool = pool.ok_or_else(|| {
        tracing::error!("Database not configured");
        BackendError::handler(StatusCode::SERVICE_UNAVAILABLE, "Database not configured")
    })?;

    let (project_name, code) = match (non_empty(&request.project_name), non_empty(&request.code)) {
        (Some(name), Some(code)) => (name, code),
        _ => {
            tracing::warn!("Save code request with missing fields");
            return Err(BackendError::handler(
                StatusCode::BAD_REQUEST,
                "Project name and code are required",
            ));
        }
    };
    tracing::info!("Save code request for: {}", project_name);

    // Find the project by name
    find_project_by_name(&pool, project_name)
        .await
        .map_err(|e| {
            tracing::error!("Database error: {:?}", e);
            BackendError::handler(StatusCode::INTERNAL_SERVER_ERROR, "Failed to save code")
        })?
        .ok_or_else(|| {
            tracing::warn!("Project not found: {}", project_name);
            BackendError::handler(StatusCode::NOT_FOUND, "Project not found")
        })?;

    // Replace the project's code document
    update_project_code(&pool, project_name, code)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update code: {:?}", e);
            BackendError::handler(StatusCode::INTERNAL_SERVER_ERROR, "Failed to save code")
        })?;

    tracing::info!("Code saved successfully for: {}", project_name);

    Ok(Json(MessageResponse {
        message: "Code saved successfully".to_string(),
    }))
}
