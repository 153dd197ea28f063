//! Authentication errors

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Authentication error
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Lockout policy fields must be positive; reported at construction
    /// time and fatal to the call site.
    #[error("invalid lockout policy: {0} must be positive")]
    InvalidLockoutPolicy(&'static str),

    /// The lockout store could not be reached. Callers must treat this
    /// as fail-closed: deny the attempt, never skip the lockout check.
    #[error("lockout store unavailable: {0}")]
    StoreUnavailable(String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AuthError::InvalidLockoutPolicy(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INVALID_AUTH_CONFIG",
                "Authentication is misconfigured",
            ),
            AuthError::StoreUnavailable(_) => {
                tracing::error!(error = %self, "lockout store unavailable, failing closed");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "LOCKOUT_STORE_UNAVAILABLE",
                    "Authentication is temporarily unavailable",
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}
