//! Authentication test helpers
//!
//! Provides utilities for creating test users, generating tokens,
//! and testing authentication flows.

use axum::http::HeaderValue;
use sqlx::SqlitePool;

use codecollab::backend::auth::sessions::create_token;
use codecollab::backend::auth::users::create_user;

/// Test user credentials
pub struct TestUser {
    pub id: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub token: String,
}

/// Create a test user in the database
pub async fn create_test_user(
    pool: &SqlitePool,
    username: &str,
    email: &str,
    password: &str,
) -> Result<TestUser, Box<dyn std::error::Error>> {
    // Hash password
    let password_hash = bcrypt::hash(password, bcrypt::DEFAULT_COST)?;

    // Create user
    let user = create_user(pool, username.to_string(), email.to_string(), password_hash).await?;

    // Generate token
    let token = create_token(user.id.clone(), user.email.clone())?;

    Ok(TestUser {
        id: user.id,
        username: user.username,
        email: user.email,
        password: password.to_string(),
        token,
    })
}

/// Create an Authorization header value for a token
pub fn auth_header(token: &str) -> HeaderValue {
    HeaderValue::from_str(&format!("Bearer {}", token)).expect("valid header value")
}
