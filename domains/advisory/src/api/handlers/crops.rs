//! Crop recommendation API handler
//!
//! Implements:
//! - POST /v1/advisory/crops - Rank crops by suitability for the given
//!   soil and climate readings

use axum::Json;
use mfcs_engine::{predict_crops, CropInputs, CropSuitability};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CropRecommendationsResponse {
    pub recommendations: Vec<CropSuitability>,
}

/// POST /v1/advisory/crops
///
/// All input fields are optional; absent ones take the intake form's
/// defaults. An empty result means no crop cleared its thresholds.
pub async fn recommend(Json(inputs): Json<CropInputs>) -> Json<CropRecommendationsResponse> {
    let recommendations = predict_crops(&inputs);

    tracing::debug!(count = recommendations.len(), "Crop recommendations computed");

    Json(CropRecommendationsResponse { recommendations })
}
