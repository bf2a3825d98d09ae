//! Error types for the relay
//!
//! This module defines custom error types used throughout the application.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Application-level errors
///
/// The 500/401 bodies are part of the relay's public contract and must stay
/// byte-for-byte stable.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("STRIPE_API_KEY not configured")]
    ApiKeyMissing,

    #[error("STRIPE_API_KEY must be a restricted key.")]
    ApiKeyNotRestricted,

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::ApiKeyMissing | AppError::ApiKeyNotRestricted => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, self.to_string()),
            // Transport faults are not retried or translated; the closest a
            // long-lived server gets to letting them propagate is a 502.
            AppError::Upstream(_) => (StatusCode::BAD_GATEWAY, self.to_string()),
            AppError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        (status, message).into_response()
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_bodies_are_stable() {
        assert_eq!(
            AppError::ApiKeyMissing.to_string(),
            "STRIPE_API_KEY not configured"
        );
        assert_eq!(
            AppError::ApiKeyNotRestricted.to_string(),
            "STRIPE_API_KEY must be a restricted key."
        );
        assert_eq!(AppError::Unauthorized.to_string(), "Unauthorized");
    }
}
