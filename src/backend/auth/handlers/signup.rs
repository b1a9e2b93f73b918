/**
 * Signup Handler
 *
 * This module implements the user registration handler for POST /api/auth/signup.
 *
 * # Registration Process
 *
 * 1. Validate username, email format and password length
 * 2. Check if user already exists
 * 3. Hash password using bcrypt
 * 4. Create user in database
 * 5. Generate JWT token
 * 6. Return token and user info
 *
 * # Validation
 *
 * - Username must be 3-30 chars, start with a letter, alphanumeric + underscore
 * - Email must contain '@' character (basic validation)
 * - Password must be at least 8 characters long
 * - Username and email must be unique
 *
 * # Security
 *
 * - Passwords are hashed using bcrypt with DEFAULT_COST
 * - Passwords are never returned in responses
 * - JWT tokens are generated with 30-day expiration
 */

use axum::{extract::State, http::StatusCode, response::Json};
use bcrypt::{hash, DEFAULT_COST};
use sqlx::SqlitePool;

use crate::backend::auth::handlers::types::{AuthResponse, SignupRequest, UserResponse};
use crate::backend::auth::sessions::create_token;
use crate::backend::auth::users::{create_user, get_user_by_email, get_user_by_username};
use crate::backend::error::BackendError;

/// Validate username format
///
/// Usernames must be:
/// - 3-30 characters long
/// - Contain only alphanumeric characters and underscores
/// - Start with a letter
fn is_valid_username(username: &str) -> bool {
    if username.len() < 3 || username.len() > 30 {
        return false;
    }

    let mut chars = username.chars();

    // First character must be a letter
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }

    // Rest can be alphanumeric or underscore
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Sign up handler
///
/// This handler processes user registration requests. It validates the input,
/// creates a new user account, and returns a JWT token for immediate authentication.
///
/// # Arguments
///
/// * `State(pool)` - Database connection pool
/// * `Json(request)` - Signup request containing username, email and password
///
/// # Returns
///
/// JSON response with JWT token and user info, or an error response
///
/// # Errors
///
/// * `400 Bad Request` - If username, email or password fail validation
/// * `409 Conflict` - If username or email is already registered
/// * `503 Service Unavailable` - If database is not configured
/// * `500 Internal Server Error` - If hashing, user creation, or token generation fails
pub async fn signup(
    State(pool): State<Option<SqlitePool>>,
    Json(request): Json<SignupRequest>,
) -> Result<Json<AuthResponse>, BackendError> {
    let pool = pool.ok_or_else(|| {
        tracing::error!("Database not configured");
        BackendError::handler(StatusCode::SERVICE_UNAVAILABLE, "Database not configured")
    })?;
    tracing::info!(
        "Signup request for username: {}, email: {}",
        request.username,
        request.email
    );

    // Validate username format
    if !is_valid_username(&request.username) {
        tracing::warn!("Invalid username format: {}", request.username);
        return Err(BackendError::handler(
            StatusCode::BAD_REQUEST,
            "Username must be 3-30 chars, start with a letter, and contain only letters, numbers, and underscores",
        ));
    }

    // Validate email format (basic check)
    if !request.email.contains('@') {
        tracing::warn!("Invalid email format: {}", request.email);
        return Err(BackendError::handler(
            StatusCode::BAD_REQUEST,
            "Invalid email format",
        ));
    }

    // Validate password length
    if request.password.len() < 8 {
        tracing::warn!("Password too short");
        return Err(BackendError::handler(
            StatusCode::BAD_REQUEST,
            "Password must be at least 8 characters",
        ));
    }

    // Check if username already exists
    if let Ok(Some(_)) = get_user_by_username(&pool, &request.username).await {
        tracing::warn!("Username already exists: {}", request.username);
        return Err(BackendError::handler(
            StatusCode::CONFLICT,
            "Username already taken",
        ));
    }

    // Check if email already exists
    if let Ok(Some(_)) = get_user_by_email(&pool, &request.email).await {
        tracing::warn!("Email already exists: {}", request.email);
        return Err(BackendError::handler(
            StatusCode::CONFLICT,
            "Email already registered",
        ));
    }

    // Hash password
    let password_hash = hash(&request.password, DEFAULT_COST).map_err(|e| {
        tracing::error!("Failed to hash password: {:?}", e);
        BackendError::handler(StatusCode::INTERNAL_SERVER_ERROR, "Server error")
    })?;

    // Create user
    let user = create_user(
        &pool,
        request.username.clone(),
        request.email.clone(),
        password_hash,
    )
    .await
    .map_err(|e| {
        tracing::error!("Failed to create user: {:?}", e);
        BackendError::handler(StatusCode::INTERNAL_SERVER_ERROR, "Failed to create user")
    })?;

    // Create token
    let token = create_token(user.id.clone(), user.email.clone()).map_err(|e| {
        tracing::error!("Failed to create token: {:?}", e);
        BackendError::handler(StatusCode::INTERNAL_SERVER_ERROR, "Server error")
    })?;

    tracing::info!(
        "User created successfully: {} ({})",
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
