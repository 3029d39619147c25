//! Unified error handling.
//!
//! Provides a unified `AppError` type that maps the error taxonomy to
//! HTTP statuses and the JSON [`ErrorBody`] contract. All route handlers
//! return `Result<T, AppError>`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use recircuit_core::api::ErrorBody;

use crate::services::auth::AuthError;
use crate::storage::RepositoryError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Repository operation failed.
    #[error("Storage error: {0}")]
    Storage(#[from] RepositoryError),

    /// Authentication operation failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Caller is not authenticated.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Request failed contract validation.
    #[error("Validation failed: {message}")]
    Validation {
        message: String,
        field: Option<String>,
    },

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// A validation error with just a message.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: None,
        }
    }

    /// A validation error pointing at a request field.
    #[must_use]
    pub fn validation_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: Some(field.into()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Server-side failures go to the log with full detail; the client
        // gets a generic message.
        if matches!(self, Self::Storage(_) | Self::Internal(_)) {
            tracing::error!(error = %self, "Request error");
        }

        let status = match &self {
            Self::Storage(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Auth(err) => match err {
                AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
                AuthError::PhoneTaken
                | AuthError::InvalidPhone(_)
                | AuthError::WeakPassword(_) => StatusCode::BAD_REQUEST,
                AuthError::PasswordHash => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
        };

        let body = match self {
            Self::Storage(_) | Self::Internal(_) => ErrorBody::message("Internal server error"),
            Self::Auth(err) => match err {
                AuthError::InvalidCredentials => {
                    ErrorBody::message("Invalid phone number or password")
                }
                AuthError::PhoneTaken => {
                    ErrorBody::field("Phone number already registered", "phone")
                }
                AuthError::InvalidPhone(e) => ErrorBody::field(e.to_string(), "phone"),
                AuthError::WeakPassword(msg) => ErrorBody::field(msg, "password"),
                AuthError::PasswordHash => ErrorBody::message("Internal server error"),
            },
            Self::NotFound(message) | Self::Unauthorized(message) => ErrorBody::message(message),
            Self::Validation { message, field } => ErrorBody { message, field },
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn get_status(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("Product not found".to_string());
        assert_eq!(err.to_string(), "Not found: Product not found");

        let err = AppError::validation("Invalid query parameters");
        assert_eq!(err.to_string(), "Validation failed: Invalid query parameters");
    }

    #[test]
    fn test_app_error_status_codes() {
        assert_eq!(
            get_status(AppError::NotFound("test".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::Unauthorized("test".to_string())),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            get_status(AppError::validation("test")),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::Internal("test".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            get_status(AppError::Auth(AuthError::InvalidCredentials)),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            get_status(AppError::Auth(AuthError::PhoneTaken)),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn internal_errors_do_not_leak_detail() {
        let response = AppError::Internal("lock poisoned in frobnicator".to_string())
            .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        // Body is the generic message; the detail only goes to the log.
    }
}
