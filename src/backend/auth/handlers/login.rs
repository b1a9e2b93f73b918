/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /api/auth/login.
 *
 * # Authentication Process
 *
 * 1. Look up user by username (or email)
 * 2. Verify password using bcrypt
 * 3. Generate JWT token
 * 4. Return token and user info
 *
 * # Security
 *
 * - Passwords are verified using bcrypt
 * - Invalid credentials return 401 Unauthorized (no information leakage)
 * - JWT tokens are generated with 30-day expiration
 * - User passwords are never returned in responses
 */
use axum::{extract::State, http::StatusCode, response::Json};
use bcrypt::verify;
use sqlx::SqlitePool;

use crate::backend::auth::handlers::types::{AuthResponse, LoginRequest, UserResponse};
use crate::backend::auth::sessions::create_token;
use crate::backend::auth::users::{get_user_by_email, get_user_by_username};
use crate::backend::error::BackendError;

/// Login handler
///
/// This handler processes user authentication requests. It verifies the
/// username and password, and returns a JWT token if authentication succeeds.
///
/// # Arguments
///
/// * `State(pool)` - Database connection pool
/// * `Json(request)` - Login request containing username and password
///
/// # Returns
///
/// JSON response with JWT token and user info, or an error response
///
/// # Errors
///
/// * `401 Unauthorized` - If user is not found or password is incorrect
/// * `503 Service Unavailable` - If database is not configured
/// * `500 Internal Server Error` - If database query or token generation fails
///
/// # Security Notes
///
/// - Unknown user and wrong password return the same error to prevent
///   user enumeration
/// - Password verification uses constant-time comparison (via bcrypt)
pub async fn login(
    State(pool): State<Option<SqlitePool>>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, BackendError> {
    let pool = pool.ok_or_else(|| {
        tracing::error!("Database not configured");
        BackendError::handler(StatusCode::SERVICE_UNAVAILABLE, "Database not configured")
    })?;
    tracing::info!("Login request for: {}", request.username);

    // Try email lookup when the identifier looks like an email
    let user = if request.username.contains('@') {
        get_user_by_email(&pool, &request.username).await
    } else {
        get_user_by_username(&pool, &request.username).await
    };

    let user = user
        .map_err(|e| {
            tracing::error!("Database error: {:?}", e);
            BackendError::handler(StatusCode::INTERNAL_SERVER_ERROR, "Server error")
        })?
        .ok_or_else(|| {
            tracing::warn!("User not found: {}", request.username);
            BackendError::handler(StatusCode::UNAUTHORIZED, "Invalid credentials")
        })?;

    // Verify password
    let valid = verify(&request.password, &user.password_hash).map_err(|e| {
        tracing::error!("Password verification error: {:?}", e);
        BackendError::handler(StatusCode::INTERNAL_SERVER_ERROR, "Server error")
    })?;

    if !valid {
        tracing::warn!("Invalid password for user: {}", request.username);
        return Err(BackendError::handler(
            StatusCode::UNAUTHORIZED,
            "Invalid credentials",
        ));
    }

    // Create token
    let token = create_token(user.id.clone(), user.email.clone()).map_err(|e| {
        tracing::error!("Failed to create token: {:?}", e);
        BackendError::handler(StatusCode::INTERNAL_SERVER_ERROR, "Server error")
    })?;

    tracing::info!(
        "User logged in successfully: {} ({})",
        user.username,
        user.email
    );

    Ok(Json(AuthResponse {
        token,
        user: UserResponse {
            id: user.id,
            username: user.username,
            email: user.email,
        },
    }))
}
