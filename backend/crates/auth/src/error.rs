//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use kernel::validation::ValidationError;
use platform::mail::ProviderError;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Payload failed schema validation
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Reset hook called without the shared secret
    #[error("Missing or invalid hook secret")]
    HookUnauthorized,

    /// The email provider rejected the message or could not be reached.
    /// The provider error is kept as the source and never displayed.
    #[error("Failed to send email")]
    EmailSendFailed(#[source] ProviderError),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::Validation(_) => StatusCode::BAD_REQUEST,
            AuthError::HookUnauthorized => StatusCode::UNAUTHORIZED,
            AuthError::EmailSendFailed(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::Validation(_) => ErrorKind::BadRequest,
            AuthError::HookUnauthorized => ErrorKind::Unauthorized,
            AuthError::EmailSendFailed(_) => ErrorKind::BadGateway,
        }
    }

    /// Convert to AppError
    pub fn into_app_error(self) -> AppError {
        let message = self.to_string();
        match self {
            AuthError::EmailSendFailed(source) => AppError::bad_gateway(message)
                .with_action("Please try again in a few minutes")
                .with_source(source),
            other => AppError::new(other.kind(), message),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::HookUnauthorized => {
                tracing::warn!("Reset hook called with a bad secret");
            }
            _ if self.kind().is_server_error() => {
                tracing::error!(error = %self, "Auth request failed");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        match self {
            AuthError::Validation(err) => err.into_response(),
            other => other.into_app_error().into_response(),
        }
    }
}
