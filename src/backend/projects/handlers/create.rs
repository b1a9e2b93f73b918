/**
 * Create Project Handler
 *
 * This module implements the project creation handler for POST /api/projects/create.
 *
 * # Creation Process
 *
 * 1. Check that both project name and password are present
 * 2. Reject duplicate project names
 * 3. Hash the project password using bcrypt
 * 4. Insert the project with its initial code document
 * 5. Return the status message and the initial code
 *
 * # Security
 *
 * - Project passwords are hashed before storage, same as user passwords
 * - The route sits behind the auth middleware; the authenticated user
 *   becomes the project owner
 */

use axum::{extract::State, http::StatusCode, response::Json};
use bcrypt::{hash, DEFAULT_COST};
use sqlx::SqlitePool;

use crate::backend::error::BackendError;
use crate::backend::middleware::auth::AuthUser;
use crate::backend::projects::db::{find_project_by_name, insert_project, INITIAL_CODE};
use crate::backend::projects::handlers::types::{
    non_empty, CreateProjectRequest, ProjectCodeResponse,
};

/// Create project handler
///
/// # Arguments
///
/// * `State(pool)` - Database connection pool
/// * `AuthUser(user)` - Authenticated user from the auth middleware
/// * `Json(request)` - Create request containing project name and password
///
/// # Returns
///
/// `201 Created` with `{"message": "Project created successfully", "code": ...}`
///
/// # Errors
///
/// * `400 Bad Request` - If project name or password is missing or empty
/// * `409 Conflict` - If a project with this name already exists
/// * `503 Service Unavailable` - If database is not configured
/// * `500 Internal Server Error` - If hashing or the insert fails
pub async fn create_project(
    State(pool): State<Option<SqlitePool>>,
    AuthUser(user): AuthUser,
    Json(request): Json<CreateProjectRequest>,
) -> Result<(StatusCode, Json<ProjectCodeResponse>), BackendError> {
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
            tracing::warn!("Create project request with missing fields");
            return Err(BackendError::handler(
                StatusCode::BAD_REQUEST,
                "Project name and password are required",
            ));
        }
    };
    tracing::info!("Create project request for: {}", project_name);

    // Check if project name already exists
    let existing = find_project_by_name(&pool, project_name).await.map_err(|e| {
        tracing::error!("Database error: {:?}", e);
        BackendError::handler(StatusCode::INTERNAL_SERVER_ERROR, "Failed to create project")
    })?;
    if existing.is_some() {
        tracing::warn!("Project name already exists: {}", project_name);
        return Err(BackendError::handler(
            StatusCode::CONFLICT,
            "Project name already exists",
        ));
    }

    // Hash the project password
    let password_hash = hash(pjpassword, DEFAULT_COST).map_err(|e| {
        tracing::error!("Failed to hash project password: {:?}", e);
        BackendError::handler(StatusCode::INTERNAL_SERVER_ERROR, "Failed to create project")
    })?;

    // Insert the project with its initial code
    let project = insert_project(
        &pool,
        project_name.to_string(),
        password_hash,
        user.user_id,
        INITIAL_CODE.to_string(),
    )
    .await
    .map_err(|e| {
        tracing::error!("Failed to insert project: {:?}", e);
        BackendError::handler(StatusCode::INTERNAL_SERVER_ERROR, "Failed to create project")
    })?;

    tracing::info!("Project created successfully: {}", project.name);

    Ok((
        StatusCode::CREATED,
        Json(ProjectCodeResponse {
            message: "Project created successfully".to_string(),
            code: project.code,
        }),
    ))
}
