//! Admin verification API handlers
//!
//! Implements:
//! - GET /v1/admin/pending-users - List registrations awaiting review
//! - POST /v1/admin/verify-user/{id} - Approve or reject a registration
//!
//! Both routes gate through the `AdminUser` extractor: callers without
//! a session are rejected with 401, non-admins and unverified admins
//! with 403.

use axum::{
    extract::{Path, State},
    Json,
};
use mfcs_auth::{AuthError, PendingRegistration, ReviewAction};
use serde::{Deserialize, Serialize};

use crate::api::middleware::{AccountsState, AdminUser};

#[derive(Debug, Serialize)]
pub struct PendingUsersResponse {
    pub users: Vec<PendingRegistration>,
}

/// GET /v1/admin/pending-users
pub async fn pending_users(
    AdminUser(admin): AdminUser,
    State(state): State<AccountsState>,
) -> Result<Json<PendingUsersResponse>, AuthError> {
    let users = state
        .auth
        .directory()
        .pending_registrations(&admin.token)
        .await?;

    Ok(Json(PendingUsersResponse { users }))
}

#[derive(Debug, Deserialize)]
pub struct ReviewRequest {
    pub action: ReviewAction,
}

/// POST /v1/admin/verify-user/{id}
pub async fn verify_user(
    AdminUser(admin): AdminUser,
    State(state): State<AccountsState>,
    Path(id): Path<String>,
    Json(request): Json<ReviewRequest>,
) -> Result<Json<PendingRegistration>, AuthError> {
    let registration = state
        .auth
        .directory()
        .review_registration(&admin.token, &id, request.action)
        .await?;

    tracing::info!(
        admin_id = %admin.id,
        registration_id = %registration.id,
        status = ?registration.status,
        "Registration review recorded"
    );

    Ok(Json(registration))
}
