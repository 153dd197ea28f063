//! Platform error contract shared across Atrium crates
//!
//! Every error carries a stable machine-readable code, an internal message,
//! and a user-safe message. The `IntoResponse` impl renders the JSON error
//! body the API contract promises; internal details never leak to clients.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Common result type
pub type Result<T> = std::result::Result<T, Error>;

/// Platform error for the Atrium product family
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Authorization error: {0}")]
    Authorization(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Rate limit exceeded: {message}")]
    RateLimit {
        message: String,
        /// Seconds until the client may retry, when known
        retry_after: Option<u64>,
    },

    /// A backing store this operation depends on could not be reached.
    /// Security-sensitive callers must treat this as fail-closed.
    #[error("Service unavailable: {0}")]
    Unavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Unexpected error: {0}")]
    Unexpected(#[from] anyhow::Error),
}

impl Error {
    /// Get the appropriate HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::Authentication(_) => StatusCode::UNAUTHORIZED,
            Error::Authorization(_) => StatusCode::FORBIDDEN,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Conflict(_) => StatusCode::CONFLICT,
            Error::RateLimit { .. } => StatusCode::TOO_MANY_REQUESTS,
            Error::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Error::Internal(_) | Error::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the stable error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::Validation(_) => "VALIDATION_ERROR",
            Error::Authentication(_) => "AUTHENTICATION_ERROR",
            Error::Authorization(_) => "AUTHORIZATION_ERROR",
            Error::NotFound(_) => "NOT_FOUND",
            Error::Conflict(_) => "CONFLICT",
            Error::RateLimit { .. } => "RATE_LIMIT_EXCEEDED",
            Error::Unavailable(_) => "SERVICE_UNAVAILABLE",
            Error::Internal(_) | Error::Unexpected(_) => "INTERNAL_ERROR",
        }
    }

    /// Get a user-safe message that never exposes internal detail
    pub fn user_message(&self) -> &'static str {
        match self {
            Error::Validation(_) => {
                "The provided input is invalid. Please check your data and try again."
            }
            Error::Authentication(_) => "Please sign in to continue.",
            Error::Authorization(_) => "You do not have permission to perform this action.",
            Error::NotFound(_) => "The requested resource could not be found.",
            Error::Conflict(_) => "The request conflicts with the current state.",
            Error::RateLimit { .. } => "Too many requests. Please try again later.",
            Error::Unavailable(_) => "The service is temporarily unavailable. Please try again.",
            Error::Internal(_) | Error::Unexpected(_) => {
                "An unexpected error occurred. Please try again."
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Log internal errors with full context; clients only see user_message
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "Internal server error");
        }

        let message = match &self {
            Error::Internal(_) | Error::Unexpected(_) => self.user_message().to_string(),
            other => other.to_string(),
        };

        let mut error_body = json!({
            "code": self.error_code(),
            "message": message,
            "userMessage": self.user_message(),
        });

        if let Error::RateLimit {
            retry_after: Some(secs),
            ..
        } = &self
        {
            error_body["retryAfter"] = json!(secs);
        }

        let body = Json(json!({
            "success": false,
            "error": error_body,
        }));

        (status, body).into_response()
    }
}
