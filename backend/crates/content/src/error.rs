//! Content Error Types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Content-specific result type alias
pub type ContentResult<T> = Result<T, ContentError>;

/// Content-specific error variants
#[derive(Debug, Error)]
pub enum ContentError {
    /// Article does not exist
    #[error("Article not found")]
    ArticleNotFound,

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

impl ContentError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ContentError::ArticleNotFound => StatusCode::NOT_FOUND,
            ContentError::Validation(_) => StatusCode::BAD_REQUEST,
            ContentError::Database(sqlx::Error::PoolTimedOut) => StatusCode::SERVICE_UNAVAILABLE,
            ContentError::Database(_) | ContentError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ContentError::ArticleNotFound => ErrorKind::NotFound,
            ContentError::Validation(_) => ErrorKind::BadRequest,
            ContentError::Database(sqlx::Error::PoolTimedOut) => ErrorKind::ServiceUnavailable,
            ContentError::Database(_) | ContentError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        if self.kind().is_server_error() {
            AppError::new(self.kind(), "Internal server error")
        } else {
            AppError::new(self.kind(), self.to_string())
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            ContentError::Database(e) => {
                tracing::error!(error = %e, "Content database error");
            }
            ContentError::Internal(msg) => {
                tracing::error!(message = %msg, "Content internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Content error");
            }
        }
    }
}

impl IntoResponse for ContentError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ContentError::ArticleNotFound.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ContentError::Validation("Title is required".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ContentError::Internal("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_server_errors_hide_detail() {
        let err = ContentError::Internal("connection string leaked".into());
        assert_eq!(err.to_app_error().message(), "Internal server error");
    }
}
