//! Authorization and authentication errors
//!
//! All variants are recoverable and surfaced to the caller as a
//! short human-readable message; none are fatal to the process.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Authentication / authorization error
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Your account is not verified. Please contact admin for verification.")]
    NotVerified,

    #[error("{0}")]
    ValidationError(String),

    #[error("Authentication required")]
    Unauthenticated,

    #[error("Insufficient role for this action")]
    InsufficientRole,

    #[error("Invalid or expired token")]
    MalformedToken,

    #[error("Registration not found: {0}")]
    RegistrationNotFound(String),

    #[error("User directory unavailable: {0}")]
    DirectoryUnavailable(String),
}

impl AuthError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::InvalidCredentials
            | AuthError::Unauthenticated
            | AuthError::MalformedToken => StatusCode::UNAUTHORIZED,
            AuthError::NotVerified | AuthError::InsufficientRole => StatusCode::FORBIDDEN,
            AuthError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AuthError::RegistrationNotFound(_) => StatusCode::NOT_FOUND,
            AuthError::DirectoryUnavailable(_) => StatusCode::BAD_GATEWAY,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::InvalidCredentials => "INVALID_CREDENTIALS",
            AuthError::NotVerified => "NOT_VERIFIED",
            AuthError::ValidationError(_) => "VALIDATION_ERROR",
            AuthError::Unauthenticated => "UNAUTHENTICATED",
            AuthError::InsufficientRole => "INSUFFICIENT_ROLE",
            AuthError::MalformedToken => "MALFORMED_TOKEN",
            AuthError::RegistrationNotFound(_) => "REGISTRATION_NOT_FOUND",
            AuthError::DirectoryUnavailable(_) => "DIRECTORY_UNAVAILABLE",
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if matches!(self, AuthError::DirectoryUnavailable(_)) {
            tracing::error!(error = %self, "User directory unavailable");
        }

        let body = Json(json!({
            "error": {
                "code": self.error_code(),
                "message": self.to_string(),
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_status_codes() {
        let cases: Vec<(AuthError, StatusCode)> = vec![
            (AuthError::InvalidCredentials, StatusCode::UNAUTHORIZED),
            (AuthError::NotVerified, StatusCode::FORBIDDEN),
            (
                AuthError::ValidationError("x".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (AuthError::Unauthenticated, StatusCode::UNAUTHORIZED),
            (AuthError::InsufficientRole, StatusCode::FORBIDDEN),
            (AuthError::MalformedToken, StatusCode::UNAUTHORIZED),
            (
                AuthError::RegistrationNotFound("x".to_string()),
                StatusCode::NOT_FOUND,
            ),
            (
                AuthError::DirectoryUnavailable("x".to_string()),
                StatusCode::BAD_GATEWAY,
            ),
        ];

        for (error, expected_status) in cases {
            let response = error.into_response();
            assert_eq!(response.status(), expected_status);
        }
    }
}
