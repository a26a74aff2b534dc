//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
///
/// Every rejection the gate can produce is a variant here; handlers and
/// middleware switch on the variant, never on exception types or strings.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No Authorization header on the request
    #[error("No token, authorization denied")]
    MissingAuthHeader,

    /// Authorization header present but not a Bearer scheme
    #[error("Invalid token format")]
    MalformedAuthHeader,

    /// Bearer scheme with nothing after it
    #[error("No token found")]
    EmptyToken,

    /// Token undecodable or signature mismatch
    #[error("Invalid token")]
    InvalidToken,

    /// Token signature valid but past its expiry
    #[error("Token expired")]
    TokenExpired,

    /// Token subject no longer exists in the user directory
    #[error("User not found")]
    UserNotFound,

    /// Login failure (unknown email or wrong password - deliberately
    /// undifferentiated)
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Registration conflict
    #[error("Email already registered")]
    EmailTaken,

    /// Request field validation failure
    #[error("{0}")]
    Validation(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::MissingAuthHeader
            | AuthError::MalformedAuthHeader
            | AuthError::EmptyToken
            | AuthError::InvalidToken
            | AuthError::TokenExpired
            | AuthError::UserNotFound => StatusCode::UNAUTHORIZED,
            AuthError::InvalidCredentials | AuthError::EmailTaken | AuthError::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            AuthError::Database(sqlx::Error::PoolTimedOut) => StatusCode::SERVICE_UNAVAILABLE,
            AuthError::Database(_) | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::MissingAuthHeader
            | AuthError::MalformedAuthHeader
            | AuthError::EmptyToken
            | AuthError::InvalidToken
            | AuthError::TokenExpired
            | AuthError::UserNotFound => ErrorKind::Unauthorized,
            AuthError::InvalidCredentials | AuthError::EmailTaken | AuthError::Validation(_) => {
                ErrorKind::BadRequest
            }
            AuthError::Database(sqlx::Error::PoolTimedOut) => ErrorKind::ServiceUnavailable,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    ///
    /// Infrastructure detail stays server-side; the client sees a generic
    /// message for 5xx errors.
    pub fn to_app_error(&self) -> AppError {
        if self.kind().is_server_error() {
            AppError::new(self.kind(), "Internal server error")
        } else {
            AppError::new(self.kind(), self.to_string())
        }
    }

    /// Log the error with appropriate level
    ///
    /// Only error kinds and sanitized messages are logged - raw tokens,
    /// passwords and signing secrets never reach this function.
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::InvalidToken => {
                tracing::warn!("Rejected token with bad structure or signature");
            }
            _ => {
                tracing::debug!(error = %self, "Auth rejection");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_rejections_are_unauthorized() {
        for err in [
            AuthError::MissingAuthHeader,
            AuthError::MalformedAuthHeader,
            AuthError::EmptyToken,
            AuthError::InvalidToken,
            AuthError::TokenExpired,
            AuthError::UserNotFound,
        ] {
            assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
        }
    }

    #[test]
    fn test_login_and_registration_failures_are_bad_request() {
        assert_eq!(
            AuthError::InvalidCredentials.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AuthError::EmailTaken.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AuthError::Validation("Email cannot be empty".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_server_errors_hide_detail_from_clients() {
        let err = AuthError::Internal("pool exploded".into());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_app_error().message(), "Internal server error");
    }

    #[test]
    fn test_pool_timeout_maps_to_service_unavailable() {
        let err = AuthError::Database(sqlx::Error::PoolTimedOut);
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
