//! Fertilizer deficit and dosage calculation
//!
//! For a chosen crop the per-nutrient requirement is fixed; the
//! deficit against the measured soil level drives product amount and
//! cost. A nutrient with no deficit produces no recommendation.
//! An unrecognized crop produces an empty plan; callers that want to
//! fail loudly should check [`crop_requirements`] first.

use serde::Serialize;

/// Per-crop N/P/K requirement (kg/ha).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NutrientRequirement {
    pub crop: &'static str,
    pub n: f64,
    pub p: f64,
    pub k: f64,
}

static CROP_REQUIREMENTS: [NutrientRequirement; 6] = [
    NutrientRequirement { crop: "wheat", n: 120.0, p: 60.0, k: 40.0 },
    NutrientRequirement { crop: "barley", n: 90.0, p: 45.0, k: 30.0 },
    NutrientRequirement { crop: "potato", n: 150.0, p: 80.0, k: 120.0 },
    NutrientRequirement { crop: "maize", n: 180.0, p: 90.0, k: 60.0 },
    NutrientRequirement { crop: "apple", n: 100.0, p: 50.0, k: 80.0 },
    NutrientRequirement { crop: "buckwheat", n: 60.0, p: 30.0, k: 40.0 },
];

/// One row of the product table: the fertilizer chosen per nutrient,
/// its effective nutrient concentration, and a fixed per-kg price.
struct NutrientProduct {
    nutrient: &'static str,
    fertilizer: &'static str,
    concentration: f64,
    price_per_kg: f64,
    application: &'static [&'static str],
}

static NITROGEN_PRODUCT: NutrientProduct = NutrientProduct {
    nutrient: "Nitrogen (N)",
    fertilizer: "Urea (46% N)",
    concentration: 0.46,
    price_per_kg: 0.8,
    application: &[
        "Apply 1/3 at planting",
        "Apply 1/3 at tillering stage",
        "Apply 1/3 at flowering stage",
    ],
};

static PHOSPHORUS_PRODUCT: NutrientProduct = NutrientProduct {
    nutrient: "Phosphorus (P)",
    fertilizer: "DAP (18% N, 46% P2O5)",
    // Approximate P2O5 to P conversion
    concentration: 0.2,
    price_per_kg: 1.2,
    application: &[
        "Apply full amount at planting",
        "Mix well with soil",
        "Place near root zone",
    ],
};

static POTASSIUM_PRODUCT: NutrientProduct = NutrientProduct {
    nutrient: "Potassium (K)",
    fertilizer: "SOP (50% K2O)",
    // K2O to K conversion
    concentration: 0.42,
    price_per_kg: 1.5,
    application: &[
        "Apply 1/2 at planting",
        "Apply 1/2 at fruit development",
        "Water immediately after application",
    ],
};

/// A dosage recommendation for one deficient nutrient.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FertilizerRecommendation {
    pub nutrient: &'static str,
    pub current: f64,
    pub required: f64,
    pub deficit: f64,
    pub fertilizer: &'static str,
    /// Product amount in kg, rounded to the nearest integer.
    pub amount: i64,
    pub cost: i64,
    pub application: &'static [&'static str],
}

/// Look up the requirement row for a crop (case-insensitive).
pub fn crop_requirements(crop: &str) -> Option<&'static NutrientRequirement> {
    CROP_REQUIREMENTS
        .iter()
        .find(|r| r.crop.eq_ignore_ascii_case(crop))
}

fn recommend(
    product: &'static NutrientProduct,
    current: f64,
    required: f64,
    area: f64,
) -> Option<FertilizerRecommendation> {
    let deficit = (required - current).max(0.0);
    if deficit <= 0.0 {
        return None;
    }

    let raw_amount = deficit / product.concentration * area;
    Some(FertilizerRecommendation {
        nutrient: product.nutrient,
        current,
        required,
        deficit,
        fertilizer: product.fertilizer,
        amount: raw_amount.round() as i64,
        cost: (raw_amount * product.price_per_kg).round() as i64,
        application: product.application,
    })
}

/// Compute the fertilizer plan for a crop over `area` hectares given
/// measured soil N/P/K levels.
///
/// Unknown crops yield an empty plan rather than an error.
pub fn calculate_fertilizer(
    crop: &str,
    area: f64,
    current_n: f64,
    current_p: f64,
    current_k: f64,
) -> Vec<FertilizerRecommendation> {
    let Some(required) = crop_requirements(crop) else {
        return Vec::new();
    };

    [
        recommend(&NITROGEN_PRODUCT, current_n, required.n, area),
        recommend(&PHOSPHORUS_PRODUCT, current_p, required.p, area),
        recommend(&POTASSIUM_PRODUCT, current_k, required.k, area),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Sum of the costs across a plan, for display.
pub fn total_cost(recommendations: &[FertilizerRecommendation]) -> i64 {
    recommendations.iter().map(|r| r.cost).sum()
}
