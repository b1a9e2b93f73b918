/**
 * Unsave Code Handler
 *
 * This module implements the code revert handler for POST /api/projects/unsaveCode.
 *
 * Reverting sets the project's code document back to the fixed initial
 * content every project starts with. Intermediate saves are discarded; there
 * is no history to restore from.
 */

use axum::{extract::State, http::StatusCode, response::Json};
use sqlx::SqlitePool;

use crate::backend::error::BackendError;
use crate::backend::projects::db::{find_project_by_name, update_project_code, INITIAL_CODE};
use crate::backend::projects::handlers::types::{non_empty, MessageResponse, UnsaveCodeRequest};

/// Unsave code handler
///
/// # Arguments
///
/// * `State(pool)` - Database connection pool
/// * `Json(request)` - Unsave request containing the project name
///
/// # Returns
///
/// `200 OK` with `{"message": "Code reverted to original"}`
///
/// # Errors
///
/// * `400 Bad Request` - If the project name is missing or empty
/// * `404 Not Found` - If no project with this name exists
/// * `503 Service Unavailable` - If database is not configured
/// * `500 Internal Server Error` - If the lookup or update fails
pub async fn unsave_code(
    State(pool): State<Option<SqlitePool>>,
    Json(request): Json<UnsaveCodeRequest>,
) -> Result<Json<MessageResponse>, BackendError> {
    let pool = pool.ok_or_else(|| {
        tracing::error!("Database not configured");
        BackendError::handler(StatusCode::SERVICE_UNAVAILABLE, "Database not configured")
    })?;

    let project_name = non_empty(&request.project_name).ok_or_else(|| {
        tracing::warn!("Unsave code request with missing project name");
        BackendError::handler(StatusCode::BAD_REQUEST, "Project name is required")
    })?;
    tracing::info!("Unsave code request for: {}", project_name);

    // Find the project by name
    find_project_by_name(&pool, project_name)
        .await
        .map_err(|e| {
            tracing::error!("Database error: {:?}", e);
            BackendError::handler(StatusCode::INTERNAL_SERVER_ERROR, "Failed to revert code")
        })?
        .ok_or_else(|| {
            tracing::warn!("Project not found: {}", project_name);
            BackendError::handler(StatusCode::NOT_FOUND, "Project not found")
        })?;

    // Revert to the initial code
    update_project_code(&pool, project_name, INITIAL_CODE)
        .await
        .map_err(|e| {
            tracing::error!("Failed to revert code: {:?}", e);
            BackendError::handler(StatusCode::INTERNAL_SERVER_ERROR, "Failed to revert code")
        })?;

    tracing::info!("Code reverted to original for: {}", project_name);

    Ok(Json(MessageResponse {
        message: "Code reverted to original".to_string(),
    }))
}
