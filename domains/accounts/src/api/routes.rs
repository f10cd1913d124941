//! Route definitions for the Accounts domain API

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{admin, sessions};
use super::middleware::AccountsState;

/// Create session routes
fn session_routes() -> Router<AccountsState> {
    Router::new()
        .route("/v1/auth/login", post(sessions::login))
        .route("/v1/auth/register", post(sessions::register))
        .route("/v1/auth/verify", post(sessions::verify))
        .route("/v1/auth/refresh", post(sessions::refresh))
}

/// Create admin verification routes
fn admin_routes() -> Router<AccountsState> {
    Router::new()
        .route("/v1/admin/pending-users", get(admin::pending_users))
        .route("/v1/admin/verify-user/{id}", post(admin::verify_user))
}

/// All Accounts domain routes
pub fn routes() -> Router<AccountsState> {
    Router::new().merge(session_routes()).merge(admin_routes())
}
