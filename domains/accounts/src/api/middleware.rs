//! Accounts domain state and auth backend integration

use axum::extract::FromRef;
use mfcs_auth::AuthBackend;

pub use mfcs_auth::{AdminUser, AuthUser};

/// Application state for the Accounts domain
#[derive(Clone)]
pub struct AccountsState {
    pub auth: AuthBackend,
}

impl FromRef<AccountsState> for AuthBackend {
    fn from_ref(state: &AccountsState) -> Self {
        state.auth.clone()
    }
}
