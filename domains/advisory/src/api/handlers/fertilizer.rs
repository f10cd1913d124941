//! Fertilizer calculation API handler
//!
//! Implements:
//! - POST /v1/advisory/fertilizer - Compute per-nutrient deficits,
//!   product amounts, and costs for a crop and area
//!
//! The engine returns an empty plan for an unknown crop; the handler
//! checks the requirement table first and responds with 404 instead.

use axum::Json;
use mfcs_common::{Error, Result};
use mfcs_engine::{calculate_fertilizer, crop_requirements, total_cost, FertilizerRecommendation};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct FertilizerRequest {
    #[validate(length(min = 1))]
    pub crop: String,

    /// Farm area in hectares
    #[serde(default = "default_area")]
    #[validate(range(min = 0.01))]
    pub area: f64,

    #[serde(default)]
    pub current_n: f64,
    #[serde(default)]
    pub current_p: f64,
    #[serde(default)]
    pub current_k: f64,
}

fn default_area() -> f64 {
    1.0
}

#[derive(Debug, Serialize)]
pub struct FertilizerResponse {
    pub recommendations: Vec<FertilizerRecommendation>,
    pub total_cost: i64,
}

/// POST /v1/advisory/fertilizer
pub async fn calculate(Json(request): Json<FertilizerRequest>) -> Result<Json<FertilizerResponse>> {
    request
        .validate()
        .map_err(|e| Error::Validation(e.to_string()))?;

    if crop_requirements(&request.crop).is_none() {
        return Err(Error::NotFound(format!("Unknown crop: {}", request.crop)));
    }

    let recommendations = calculate_fertilizer(
        &request.crop,
        request.area,
        request.current_n,
        request.current_p,
        request.current_k,
    );
    let total = total_cost(&recommendations);

    tracing::debug!(
        crop = %request.crop,
        nutrients = recommendations.len(),
        total_cost = total,
        "Fertilizer plan computed"
    );

    Ok(Json(FertilizerResponse {
        recommendations,
        total_cost: total,
    }))
}
