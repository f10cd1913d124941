//! Axum extractors for authentication
//!
//! Generic over any state `S` where `AuthBackend: FromRef<S>`.
//! This is axum's idiomatic nested-state pattern.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::authorize::authorize;
use crate::backend::AuthBackend;
use crate::error::AuthError;
use crate::token::extract_bearer_token;
use crate::types::{Identity, Role};

/// Authenticated user extractor.
#[derive(Debug)]
pub struct AuthUser(pub Identity);

impl<S> FromRequestParts<S> for AuthUser
where
    AuthBackend: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let backend = AuthBackend::from_ref(state);

        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or(AuthError::Unauthenticated)?;

        let bearer = extract_bearer_token(auth_header)?;
        let identity = backend.authenticate_bearer(&bearer).await?;

        Ok(AuthUser(identity))
    }
}

/// Verified-admin extractor.
///
/// Like `AuthUser` but additionally requires a verified account with
/// admin rank; rejects with 403 otherwise. Use this on the admin
/// review endpoints.
#[derive(Debug)]
pub struct AdminUser(pub Identity);

impl<S> FromRequestParts<S> for AdminUser
where
    AuthBackend: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let AuthUser(identity) = AuthUser::from_request_parts(parts, state).await?;

        authorize(Some(&identity), Role::Admin)?;

        Ok(AdminUser(identity))
    }
}
