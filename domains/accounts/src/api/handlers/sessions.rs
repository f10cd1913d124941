//! Session API handlers
//!
//! Implements:
//! - POST /v1/auth/login - Authenticate credentials, mint a session token
//! - POST /v1/auth/register - Queue a pending registration
//! - POST /v1/auth/verify - Resolve the caller's bearer token
//! - POST /v1/auth/refresh - Exchange a refresh token for a fresh access token

use axum::{extract::State, http::StatusCode, Json};
use mfcs_auth::{
    AuthError, Identity, RegistrationReceipt, RegistrationRequest, Role,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::middleware::{AccountsState, AuthUser};

/// User fields exposed over the wire. The bearer token travels in its
/// own field on login, never inside the user object.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub is_verified: bool,
}

impl From<Identity> for UserResponse {
    fn from(identity: Identity) -> Self {
        Self {
            id: identity.id,
            name: identity.name,
            email: identity.email,
            role: identity.role,
            is_verified: identity.is_verified,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub user: UserResponse,
    pub access_token: String,
    pub refresh_token: String,
}

/// POST /v1/auth/login
pub async fn login(
    State(state): State<AccountsState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AuthError> {
    let session = state
        .auth
        .directory()
        .login(&request.email, &request.password)
        .await?;

    tracing::info!(user_id = %session.user.id, role = %session.user.role, "Login succeeded");

    let access_token = session.user.token.clone();
    Ok(Json(LoginResponse {
        user: UserResponse::from(session.user),
        access_token,
        refresh_token: session.refresh_token,
    }))
}

/// Request for creating a new account
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    #[validate(length(min = 1, max = 255))]
    pub email: String,

    #[validate(length(min = 1))]
    pub password: String,

    #[validate(length(min = 1, max = 32))]
    pub phone: String,

    pub location: Option<String>,

    #[serde(default = "default_user_type")]
    pub user_type: Role,
}

fn default_user_type() -> Role {
    Role::Farmer
}

/// POST /v1/auth/register
pub async fn register(
    State(state): State<AccountsState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegistrationReceipt>), AuthError> {
    request
        .validate()
        .map_err(|e| AuthError::ValidationError(e.to_string()))?;

    // Only the non-privileged roles are open for self-registration
    if request.user_type == Role::Admin {
        return Err(AuthError::ValidationError(
            "user_type must be farmer, buyer, or seller".to_string(),
        ));
    }

    let receipt = state
        .auth
        .directory()
        .register(RegistrationRequest {
            name: request.name,
            email: request.email,
            password: request.password,
            phone: request.phone,
            location: request.location,
            user_type: request.user_type,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(receipt)))
}

#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    pub user: UserResponse,
}

/// POST /v1/auth/verify - token introspection for the current caller
pub async fn verify(AuthUser(identity): AuthUser) -> Json<VerifyResponse> {
    Json(VerifyResponse {
        user: UserResponse::from(identity),
    })
}

#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh: String,
}

#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    pub access: String,
}

/// POST /v1/auth/refresh
pub async fn refresh(
    State(state): State<AccountsState>,
    Json(request): Json<RefreshRequest>,
) -> Result<Json<RefreshResponse>, AuthError> {
    let access = state
        .auth
        .directory()
        .refresh_token(&request.refresh)
        .await?;

    Ok(Json(RefreshResponse { access }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mfcs_auth::{AuthBackend, AuthConfig, MockDirectory};
    use std::sync::Arc;

    fn state() -> AccountsState {
        AccountsState {
            auth: AuthBackend::new(Arc::new(MockDirectory::new(AuthConfig::new(
                "test-secret",
                3600,
            )))),
        }
    }

    #[tokio::test]
    async fn test_login_returns_user_and_token() {
        let response = login(
            State(state()),
            Json(LoginRequest {
                email: "admin@mfcs.com".to_string(),
                password: "admin123".to_string(),
            }),
        )
        .await
        .unwrap();

        assert_eq!(response.user.role, Role::Admin);
        assert!(response.user.is_verified);
        assert!(!response.access_token.is_empty());
        assert!(!response.refresh_token.is_empty());
        assert_ne!(response.access_token, response.refresh_token);
    }

    #[tokio::test]
    async fn test_login_rejects_unverified_account() {
        let result = login(
            State(state()),
            Json(LoginRequest {
                email: "unverified@example.com".to_string(),
                password: "test123".to_string(),
            }),
        )
        .await;

        assert!(matches!(result, Err(AuthError::NotVerified)));
    }

    #[tokio::test]
    async fn test_register_rejects_admin_user_type() {
        let result = register(
            State(state()),
            Json(RegisterRequest {
                name: "Sneaky".to_string(),
                email: "sneaky@example.com".to_string(),
                password: "secret".to_string(),
                phone: "123".to_string(),
                location: None,
                user_type: Role::Admin,
            }),
        )
        .await;

        assert!(matches!(result, Err(AuthError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_register_rejects_empty_fields() {
        let result = register(
            State(state()),
            Json(RegisterRequest {
                name: String::new(),
                email: "new@example.com".to_string(),
                password: "secret".to_string(),
                phone: "123".to_string(),
                location: None,
                user_type: Role::Farmer,
            }),
        )
        .await;

        assert!(matches!(result, Err(AuthError::ValidationError(_))));
    }
}
