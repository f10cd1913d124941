//! Route definitions for the Advisory domain API

use axum::{routing::post, Router};

use super::handlers::{crops, fertilizer};

/// All Advisory domain routes. The advisory endpoints are public,
/// like the portal tabs they back.
pub fn routes() -> Router {
    Router::new()
        .route("/v1/advisory/crops", post(crops::recommend))
        .route("/v1/advisory/fertilizer", post(fertilizer::calculate))
}
