//! Pluggable user directory boundary
//!
//! The portal authenticates against a directory of users. The mock
//! implementation keeps everything in process; the remote one talks
//! to a real backend over HTTP. Both satisfy the same contract, so a
//! deployment swaps providers through configuration alone.

use std::sync::Arc;

use mfcs_common::Config;

use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::mock::MockDirectory;
use crate::remote::RemoteDirectory;
use crate::types::{
    Identity, LoginSession, PendingRegistration, RegistrationReceipt, RegistrationRequest,
    ReviewAction,
};

/// User directory operations.
///
/// Admin-only operations take the caller's bearer token so the remote
/// implementation can forward it; gating still happens at the caller.
#[async_trait::async_trait]
pub trait UserDirectory: Send + Sync {
    /// Authenticate credentials and mint an access/refresh token pair.
    ///
    /// Fails with `InvalidCredentials` when nothing matches, and with
    /// `NotVerified` when credentials match an unverified account -
    /// verification blocks login even with a correct password.
    async fn login(&self, email: &str, password: &str) -> Result<LoginSession, AuthError>;

    /// Create a pending, unverified account. Never yields a session.
    async fn register(
        &self,
        request: RegistrationRequest,
    ) -> Result<RegistrationReceipt, AuthError>;

    /// Resolve a bearer token back to its identity.
    async fn verify_token(&self, token: &str) -> Result<Identity, AuthError>;

    /// Exchange a refresh token for a fresh access token.
    async fn refresh_token(&self, refresh: &str) -> Result<String, AuthError>;

    /// List registrations awaiting review.
    async fn pending_registrations(
        &self,
        admin_token: &str,
    ) -> Result<Vec<PendingRegistration>, AuthError>;

    /// Approve or reject a pending registration. Already-decided
    /// records are returned unchanged (no re-review).
    async fn review_registration(
        &self,
        admin_token: &str,
        id: &str,
        action: ReviewAction,
    ) -> Result<PendingRegistration, AuthError>;
}

/// Factory that selects the directory implementation from config.
pub struct DirectoryFactory;

impl DirectoryFactory {
    pub fn create(config: &Config) -> anyhow::Result<Arc<dyn UserDirectory>> {
        match config.directory_provider.as_str() {
            "mock" => {
                tracing::info!("Using in-process mock user directory");
                let auth_config = AuthConfig::new(&config.jwt_secret, config.token_ttl_secs);
                Ok(Arc::new(MockDirectory::new(auth_config)))
            }
            "remote" => {
                tracing::info!(base_url = %config.api_base_url, "Using remote user directory");
                Ok(Arc::new(RemoteDirectory::new(config.api_base_url.clone())))
            }
            other => Err(anyhow::anyhow!("Unknown directory provider: {other}")),
        }
    }
}
