/**
 * Authentication Middleware
 *
 * This module provides middleware for protecting routes that require
 * user authentication. It extracts and verifies JWT tokens from the
 * Authorization header and provides the user ID to handlers.
 */

use axum::{
    extract::Request,
    http::{header::AUTHORIZATION, StatusCode},
    middleware::Next,
    response::Response,
};

use crate::backend::auth::sessions::verify_token;
use crate::backend::error::BackendError;

/// Authenticated user data extracted from JWT token
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: String,
    pub email: String,
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the JWT token from the Authorization header
/// 2. Verifies the token
/// 3. Attaches user data to request extensions for use in handlers
///
/// # Errors
///
/// * `401 Unauthorized` with `{"error": "No token provided"}` if the
///   Authorization header is missing
/// * `401 Unauthorized` with `{"error": "Invalid or expired token"}` if the
///   token fails verification
pub async fn auth_middleware(mut request: Request, next: Next) -> Result<Response, BackendError> {
    // Get Authorization header
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            BackendError::handler(StatusCode::UNAUTHORIZED, "No token provided")
        })?;

    // Header format is "Bearer <token>". The scheme itself is not checked;
    // the token is whatever follows the first space.
    let token = auth_header.split(' ').nth(1).unwrap_or_default();

    // Verify token
    let claims = verify_token(token).map_err(|e| {
        tracing::warn!("Invalid token: {:?}", e);
        BackendError::handler(StatusCode::UNAUTHORIZED, "Invalid or expired token")
    })?;

    // Attach authenticated user to request extensions
    request.extensions_mut().insert(AuthenticatedUser {
        user_id: claims.sub,
        email: claims.email,
    });

    Ok(next.run(request).await)
}

/// Axum extractor for authenticated user
///
/// This can be used as a parameter in handlers to automatically extract
/// the authenticated user from request extensions. It only succeeds on
/// routes layered with [`auth_middleware`].
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S: Send + Sync> axum::extract::FromRequestParts<S> for AuthUser {
    type Rejection = BackendError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                BackendError::handler(StatusCode::UNAUTHORIZED, "No token provided")
            })?;

        Ok(AuthUser(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::FromRequestParts;

    #[tokio::test]
    async fn test_auth_user_extractor() {
        let request = axum::http::Request::builder()
            .uri("http://example.com")
            .body(())
            .unwrap();
        let (mut parts, _) = request.into_parts();

        parts.extensions.insert(AuthenticatedUser {
            user_id: "user-1".to_string(),
            email: "test@example.com".to_string(),
        });

        let extracted = AuthUser::from_request_parts(&mut parts, &()).await;
        assert!(extracted.is_ok());
        assert_eq!(extracted.unwrap().0.user_id, "user-1");
    }

    #[tokio::test]
    async fn test_auth_user_extractor_missing() {
        let request = axum::http::Request::builder()
            .uri("http://example.com")
            .body(())
            .unwrap();
        let (mut parts, _) = request.into_parts();

        let extracted = AuthUser::from_request_parts(&mut parts, &()).await;
        assert_eq!(
            extracted.unwrap_err().status_code(),
            StatusCode::UNAUTHORIZED
        );
    }
}
