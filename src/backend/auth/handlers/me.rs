/**
 * Get Current User Handler
 *
 * This module implements the handler for GET /api/auth/me, which returns
 * information about the currently authenticated user.
 *
 * # Authentication
 *
 * This endpoint sits behind the auth middleware, so the JWT token has
 * already been verified by the time the handler runs. The user ID comes
 * from the request extensions via the `AuthUser` extractor.
 *
 * # Response
 *
 * Returns user information without sensitive data (no password hash).
 */

use axum::{extract::State, http::StatusCode, response::Json};
use sqlx::SqlitePool;

use crate::backend::auth::handlers::types::UserResponse;
use crate::backend::auth::users::get_user_by_id;
use crate::backend::error::BackendError;
use crate::backend::middleware::auth::AuthUser;

/// Get current user handler
///
/// This handler returns information about the currently authenticated user.
///
/// # Arguments
///
/// * `State(pool)` - Database connection pool
/// * `AuthUser(user)` - Authenticated user from the auth middleware
///
/// # Returns
///
/// JSON response with user info, or an error response
///
/// # Errors
///
/// * `404 Not Found` - If the user no longer exists in the database
/// * `503 Service Unavailable` - If database is not configured
/// * `500 Internal Server Error` - If the database query fails
pub async fn get_me(
    State(pool): State<Option<SqlitePool>>,
    AuthUser(user): AuthUser,
) -> Result<Json<UserResponse>, BackendError> {
    let pool = pool.ok_or_else(|| {
        tracing::error!("Database not configured");
        BackendError::handler(StatusCode::SERVICE_UNAVAILABLE, "Database not configured")
    })?;

    // Get user from database
    let user = get_user_by_id(&pool, &user.user_id)
        .await
        .map_err(|e| {
            tracing::error!("Database error: {:?}", e);
            BackendError::handler(StatusCode::INTERNAL_SERVER_ERROR, "Server error")
        })?
        .ok_or_else(|| {
            tracing::warn!("User not found: {}", user.user_id);
            BackendError::handler(StatusCode::NOT_FOUND, "User not found")
        })?;

    Ok(Json(UserResponse {
        id: user.id,
        username: user.username,
        email: user.email,
    }))
}
