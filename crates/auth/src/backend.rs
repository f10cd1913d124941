//! Authentication backend for HTTP handlers
//!
//! Wraps the configured user directory. Domain states expose this via
//! `FromRef` so the extractors work against any router state:
//! ```ignore
//! impl FromRef<MyDomainState> for AuthBackend {
//!     fn from_ref(state: &MyDomainState) -> Self {
//!         state.auth.clone()
//!     }
//! }
//! ```

use std::sync::Arc;

use crate::directory::UserDirectory;
use crate::error::AuthError;
use crate::token;
use crate::types::Identity;

/// Cloneable handle to the user directory for request authentication.
#[derive(Clone)]
pub struct AuthBackend {
    directory: Arc<dyn UserDirectory>,
}

impl AuthBackend {
    pub fn new(directory: Arc<dyn UserDirectory>) -> Self {
        Self { directory }
    }

    pub fn directory(&self) -> &Arc<dyn UserDirectory> {
        &self.directory
    }

    /// Resolve a bearer token to an identity.
    ///
    /// Tokens that fail the structural or expiry checks are rejected
    /// before the directory is consulted.
    pub(crate) async fn authenticate_bearer(&self, bearer: &str) -> Result<Identity, AuthError> {
        if !token::is_token_valid(bearer) {
            tracing::debug!("Bearer token failed shape or expiry check");
            return Err(AuthError::MalformedToken);
        }

        self.directory.verify_token(bearer).await
    }
}
