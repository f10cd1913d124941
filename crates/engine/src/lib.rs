//! MFCS advisory rule engine
//!
//! Pure, deterministic decision tables behind the portal's advisory
//! features:
//! - crop suitability scoring over soil and climate readings
//! - fertilizer deficit, dosage, and cost calculation per crop
//!
//! Both halves are data-driven (a fixed rule table per crop) and carry
//! no state or I/O, so they are unit-testable in isolation.

pub mod crops;
pub mod fertilizer;

pub use crops::{predict_crops, CropInputs, CropSuitability, MAX_RECOMMENDATIONS};
pub use fertilizer::{
    calculate_fertilizer, crop_requirements, total_cost, FertilizerRecommendation,
    NutrientRequirement,
};
