/**
 * Backend Error Types
 *
 * This module defines error types specific to the backend server.
 * These errors are used in HTTP handlers and can be converted to HTTP responses.
 *
 * # Error Categories
 *
 * ## Handler Errors
 *
 * Handler errors occur when processing HTTP requests:
 * - Missing or invalid request fields (400)
 * - Missing or invalid bearer tokens (401)
 * - Unknown projects (404), duplicate project names (409)
 * - Database failures (500) and missing database configuration (503)
 *
 * Each handler error carries the exact status code and message it should
 * produce on the wire, so the error taxonomy lives at the call sites.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::SharedError;

/// Backend-specific error types
///
/// This enum represents all possible errors that can occur in the backend.
/// Each variant includes relevant context and can be converted to an HTTP response.
///
/// # Usage
///
/// ```rust
/// use codecollab::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// // Create a handler error
/// let err = BackendError::handler(StatusCode::NOT_FOUND, "Project not found");
/// assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error (e.g., missing fields, invalid credentials)
    ///
    /// This error occurs when processing HTTP requests fails due to
    /// invalid input, missing authentication, or persistence failures.
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// Shared error (from shared module)
    ///
    /// This error wraps errors from the shared module, such as
    /// serialization errors or validation errors.
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Serialization error
    ///
    /// This error occurs when serializing or deserializing data fails.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl BackendError {
    /// Create a new handler error with a status code
    ///
    /// # Arguments
    ///
    /// * `status` - HTTP status code
    /// * `message` - Error message
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `HandlerError` - Uses the status code from the error
    /// - `SharedError` - 400 for validation, 500 for serialization
    /// - `SerializationError` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::SharedError(err) => match err {
                SharedError::SerializationError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
                SharedError::ValidationError { .. } => StatusCode::BAD_REQUEST,
            },
            Self::SerializationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error message
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::SharedError(err) => err.to_string(),
            Self::SerializationError(err) => err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handler_error() {
        let error = BackendError::handler(StatusCode::BAD_REQUEST, "Project name is required");
        match error {
            BackendError::HandlerError { status, message } => {
                assert_eq!(status, StatusCode::BAD_REQUEST);
                assert_eq!(message, "Project name is required");
            }
            _ => panic!("Expected HandlerError"),
        }
    }

    #[test]
    fn test_status_code_mapping() {
        let unauthorized = BackendError::handler(StatusCode::UNAUTHORIZED, "No token provided");
        assert_eq!(unauthorized.status_code(), StatusCode::UNAUTHORIZED);

        let conflict = BackendError::handler(StatusCode::CONFLICT, "Project name already exists");
        assert_eq!(conflict.status_code(), StatusCode::CONFLICT);

        let validation: BackendError = SharedError::validation("pjname", "empty").into();
        assert_eq!(validation.status_code(), StatusCode::BAD_REQUEST);

        let serialization: BackendError = SharedError::serialization("bad frame").into();
        assert_eq!(serialization.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_from_shared_error() {
        let shared_error = SharedError::validation("field", "message");
        let backend_error: BackendError = shared_error.into();

        match backend_error {
            BackendError::SharedError(_) => {}
            _ => panic!("Expected SharedError variant"),
        }
    }

    #[test]
    fn test_from_serde_error() {
        let serde_error = serde_json::from_str::<serde_json::Value>("{ bad }").unwrap_err();
        let backend_error: BackendError = serde_error.into();
        assert_eq!(
            backend_error.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_message() {
        let error = BackendError::handler(StatusCode::NOT_FOUND, "Project not found");
        assert_eq!(error.message(), "Project not found");
    }
}
