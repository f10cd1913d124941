//! Remote user directory
//!
//! HTTP client for a real auth backend. Endpoints and wire field
//! names follow the backend contract: JSON bodies, snake_case fields,
//! bearer tokens via `Authorization: Bearer <token>`.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::directory::UserDirectory;
use crate::error::AuthError;
use crate::token::bearer_header;
use crate::types::{
    Identity, LoginSession, PendingRegistration, RegistrationReceipt, RegistrationRequest,
    ReviewAction, Role,
};

/// Remote directory client.
pub struct RemoteDirectory {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct WireUser {
    id: String,
    name: String,
    email: String,
    role: Role,
    is_verified: bool,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    user: WireUser,
    access_token: String,
    refresh_token: String,
}

#[derive(Debug, Deserialize)]
struct VerifyResponse {
    user: WireUser,
}

#[derive(Debug, Deserialize)]
struct RefreshResponse {
    access: String,
}

#[derive(Debug, Deserialize)]
struct PendingUsersResponse {
    users: Vec<PendingRegistration>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

#[derive(Debug, Serialize)]
struct ReviewBody {
    action: ReviewAction,
}

impl RemoteDirectory {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Map a non-success auth response to the local error taxonomy.
    async fn auth_failure(response: reqwest::Response) -> AuthError {
        let status = response.status();
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|b| b.message);

        match status {
            StatusCode::UNAUTHORIZED => AuthError::InvalidCredentials,
            StatusCode::FORBIDDEN => AuthError::NotVerified,
            StatusCode::BAD_REQUEST => AuthError::ValidationError(
                message.unwrap_or_else(|| "Invalid request".to_string()),
            ),
            StatusCode::NOT_FOUND => {
                AuthError::RegistrationNotFound(message.unwrap_or_else(|| status.to_string()))
            }
            _ => AuthError::DirectoryUnavailable(format!(
                "Backend returned {status}: {}",
                message.unwrap_or_default()
            )),
        }
    }

    fn transport_error(e: reqwest::Error) -> AuthError {
        tracing::warn!(error = %e, "User directory request failed");
        AuthError::DirectoryUnavailable(e.to_string())
    }

    fn identity_from_wire(user: WireUser, token: String) -> Identity {
        Identity {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
            is_verified: user.is_verified,
            token,
        }
    }
}

#[async_trait::async_trait]
impl UserDirectory for RemoteDirectory {
    async fn login(&self, email: &str, password: &str) -> Result<LoginSession, AuthError> {
        let response = self
            .http
            .post(self.url("/auth/login/"))
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(Self::transport_error)?;

        if !response.status().is_success() {
            return Err(Self::auth_failure(response).await);
        }

        let body: LoginResponse = response.json().await.map_err(Self::transport_error)?;
        Ok(LoginSession {
            user: Self::identity_from_wire(body.user, body.access_token),
            refresh_token: body.refresh_token,
        })
    }

    async fn register(
        &self,
        request: RegistrationRequest,
    ) -> Result<RegistrationReceipt, AuthError> {
        request.validate()?;

        let response = self
            .http
            .post(self.url("/auth/register/"))
            .json(&serde_json::json!({
                "name": request.name,
                "email": request.email,
                "password": request.password,
                "phone": request.phone,
                "location": request.location,
                "user_type": request.user_type,
            }))
            .send()
            .await
            .map_err(Self::transport_error)?;

        if !response.status().is_success() {
            return Err(Self::auth_failure(response).await);
        }

        response.json().await.map_err(Self::transport_error)
    }

    async fn verify_token(&self, bearer: &str) -> Result<Identity, AuthError> {
        let response = self
            .http
            .post(self.url("/auth/verify/"))
            .header(reqwest::header::AUTHORIZATION, bearer_header(bearer))
            .send()
            .await
            .map_err(Self::transport_error)?;

        if !response.status().is_success() {
            // Any backend rejection of the token reads as malformed/expired
            return Err(AuthError::MalformedToken);
        }

        let body: VerifyResponse = response.json().await.map_err(Self::transport_error)?;
        Ok(Self::identity_from_wire(body.user, bearer.to_string()))
    }

    async fn refresh_token(&self, refresh: &str) -> Result<String, AuthError> {
        let response = self
            .http
            .post(self.url("/auth/refresh/"))
            .json(&serde_json::json!({ "refresh": refresh }))
            .send()
            .await
            .map_err(Self::transport_error)?;

        if !response.status().is_success() {
            return Err(AuthError::MalformedToken);
        }

        let body: RefreshResponse = response.json().await.map_err(Self::transport_error)?;
        Ok(body.access)
    }

    async fn pending_registrations(
        &self,
        admin_token: &str,
    ) -> Result<Vec<PendingRegistration>, AuthError> {
        let response = self
            .http
            .get(self.url("/admin/pending-users/"))
            .header(reqwest::header::AUTHORIZATION, bearer_header(admin_token))
            .send()
            .await
            .map_err(Self::transport_error)?;

        if !response.status().is_success() {
            return Err(Self::auth_failure(response).await);
        }

        let body: PendingUsersResponse = response.json().await.map_err(Self::transport_error)?;
        Ok(body.users)
    }

    async fn review_registration(
        &self,
        admin_token: &str,
        id: &str,
        action: ReviewAction,
    ) -> Result<PendingRegistration, AuthError> {
        let response = self
            .http
            .post(self.url(&format!("/admin/verify-user/{id}/")))
            .header(reqwest::header::AUTHORIZATION, bearer_header(admin_token))
            .json(&ReviewBody { action })
            .send()
            .await
            .map_err(Self::transport_error)?;

        if !response.status().is_success() {
            return Err(Self::auth_failure(response).await);
        }

        response.json().await.map_err(Self::transport_error)
    }
}
