//! MFCS portal application composition root
//!
//! Composes the domain routers into a single application.

use axum::Router;
use mfcs_accounts::AccountsState;
use mfcs_auth::{AuthBackend, DirectoryFactory};
use mfcs_common::Config;

/// Create the main application router with all routes and middleware
pub fn create_app(config: &Config) -> Result<Router, anyhow::Error> {
    // Select the user directory from configuration (mock or remote)
    let directory = DirectoryFactory::create(config)?;

    let accounts_state = AccountsState {
        auth: AuthBackend::new(directory),
    };

    // Build router - compose domain routers with shared infrastructure routes
    let app = Router::new()
        .route("/health", axum::routing::get(health_check))
        .route(
            "/",
            axum::routing::get(|| async { "MFCS Portal API v0.1.0" }),
        )
        .merge(mfcs_accounts::routes().with_state(accounts_state))
        .merge(mfcs_advisory::routes());

    Ok(app)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
