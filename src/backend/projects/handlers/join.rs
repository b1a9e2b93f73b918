/**
 * Join Project Handler
 *
 * This module implements the project join handler for POST /api/projects/join.
 *
 * # Join Process
 *
 * 1. Check that both project name and password are present
 * 2. Look up the project by name
 * 3. Verify the project password using bcrypt
 * 4. Return the status message and the current code document
 *
 * Joining here means proving knowledge of the project credentials and
 * receiving the code; realtime room membership is a separate step over
 * the WebSocket relay.
 */

use axum::{extract::State, http::StatusCode, response::Json};
use bcrypt::verify;
use sqlx::SqlitePool;

use crate::backend::error::BackendError;
use crate::backend::projects::db::find_project_by_name;
use crate::backend::projects::handlers::types::{
    non_empty, JoinProjectRequest, ProjectCodeResponse,
};

/// Join project handler
///
/// # Arguments
///
/// * `State(pool)` - Database connection pool
/// * `Json(request)` - Join request containing project name and password
///
/// # Returns
///
/// `200 OK` with `{"message": "Joined project successfully", "code": ...}`
///
/// # Errors
///
/// * `400 Bad Request` - If project name or password is missing or empty
/// * `404 Not Found` - If no project with this name exists
/// * `401 Unauthorized` - If the project password is wrong
/// * `503 Service Unavailable` - If database is not configured
/// * `500 Internal Server Error` - If the lookup or verification fails
pub async fn join_project(
    State(pool): State<Option<SqlitePool>>,
    Json(request): Json<JoinProjectRequest>,
) -> Result<Json<ProjectCodeResponse>, BackendError> {
    let pool = pool.ok_or_else(|| {
        tracing::error!("Database not configured");
        BackendError::handler(StatusCode::SERVICE_UNAVAILABLE, "Database not configured")
    })?;

    let (project_name, pjpassword) = match (
        non_empty(&request.project_name),
        non_empty(&request.pjpassword),
    ) {
        (Some(name), Some(password)) => (name, password),
        _ => {
            tracing::warn!("Join project request with missing fields");
            return Err(BackendError::handler(
                StatusCode::BAD_REQUEST,
                "Project name and password are required",
            ));
        }
    };
    tracing::info!("Join project request for: {}", project_name);

    // Find the project by name
    let project = find_project_by_name(&pool, project_name)
        .await
        .map_err(|e| {
            tracing::error!("Database error: {:?}", e);
            BackendError::handler(StatusCode::INTERNAL_SERVER_ERROR, "Failed to join project")
        })?
        .ok_or_else(|| {
            tracing::warn!("Project not found: {}", project_name);
            BackendError::handler(StatusCode::NOT_FOUND, "Project not found")
        })?;

    // Verify the project password
    let valid = verify(pjpassword, &project.password_hash).map_err(|e| {
        tracing::error!("Password verification error: {:?}", e);
        BackendError::handler(StatusCode::INTERNAL_SERVER_ERROR, "Failed to join project")
    })?;

    if !valid {
        tracing::warn!("Invalid project credentials for: {}", project_name);
        return Err(BackendError::handler(
            StatusCode::UNAUTHORIZED,
            "Invalid project credentials",
        ));
    }

    tracing::info!("Joined project successfully: {}", project.name);

    Ok(Json(ProjectCodeResponse {
        message: "Joined project successfully".to_string(),
        code: project.code,
    }))
}
