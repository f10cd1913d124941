//! Crop suitability scoring
//!
//! Each supported crop carries a threshold predicate over the inputs,
//! a linear scoring formula, and a crop-specific cap. Crops whose
//! thresholds are all satisfied are scored, sorted descending, and
//! truncated to the top five. Ties keep table order (the sort is
//! stable), so identical inputs always yield an identical list.

use serde::{Deserialize, Serialize};

/// Maximum number of recommendations returned by [`predict_crops`].
pub const MAX_RECOMMENDATIONS: usize = 5;

/// Soil and climate readings for a field.
///
/// Absent fields default the way the intake form does: nutrients and
/// rainfall to zero, pH to neutral, temperature to a temperate 20 °C.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CropInputs {
    /// Nitrogen (kg/ha)
    #[serde(default)]
    pub nitrogen: f64,
    /// Phosphorus (kg/ha)
    #[serde(default)]
    pub phosphorus: f64,
    /// Potassium (kg/ha)
    #[serde(default)]
    pub potassium: f64,
    /// Annual rainfall (mm)
    #[serde(default)]
    pub rainfall: f64,
    /// Soil pH
    #[serde(default = "default_ph")]
    pub ph: f64,
    /// Average temperature (°C)
    #[serde(default = "default_temperature")]
    pub temperature: f64,
}

fn default_ph() -> f64 {
    7.0
}

fn default_temperature() -> f64 {
    20.0
}

impl Default for CropInputs {
    fn default() -> Self {
        Self {
            nitrogen: 0.0,
            phosphorus: 0.0,
            potassium: 0.0,
            rainfall: 0.0,
            ph: default_ph(),
            temperature: default_temperature(),
        }
    }
}

/// A scored crop recommendation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CropSuitability {
    pub crop: &'static str,
    /// Bounded 0-100 fitness of the crop to the given inputs.
    pub suitability: f64,
    pub season: &'static str,
    pub expected_yield: &'static str,
    pub tips: &'static [&'static str],
}

/// One row of the crop decision table.
struct CropRule {
    crop: &'static str,
    season: &'static str,
    expected_yield: &'static str,
    tips: &'static [&'static str],
    threshold: fn(&CropInputs) -> bool,
    score: fn(&CropInputs) -> f64,
    cap: f64,
}

static CROP_RULES: [CropRule; 6] = [
    // Wheat - good for moderate conditions
    CropRule {
        crop: "Wheat",
        season: "Winter (Rabi)",
        expected_yield: "3-4 tons/hectare",
        tips: &[
            "Plant in October-November",
            "Ensure proper drainage",
            "Apply nitrogen in split doses",
        ],
        threshold: |i| {
            i.nitrogen >= 40.0
                && i.phosphorus >= 20.0
                && i.potassium >= 20.0
                && i.rainfall >= 300.0
                && i.ph >= 6.0
                && i.ph <= 8.0
        },
        score: |i| 70.0 + (i.nitrogen + i.phosphorus + i.potassium) / 10.0,
        cap: 95.0,
    },
    // Barley - hardy crop for mountain regions
    CropRule {
        crop: "Barley",
        season: "Winter (Rabi)",
        expected_yield: "2-3 tons/hectare",
        tips: &[
            "Drought tolerant",
            "Good for high altitude",
            "Harvest before full maturity",
        ],
        threshold: |i| i.potassium >= 30.0 && i.rainfall >= 200.0 && i.ph >= 6.5,
        score: |i| 65.0 + i.potassium / 5.0,
        cap: 90.0,
    },
    // Potatoes - good for cool climate
    CropRule {
        crop: "Potato",
        season: "Spring/Summer",
        expected_yield: "15-20 tons/hectare",
        tips: &[
            "Plant in March-April",
            "Ensure good drainage",
            "Hill up regularly",
        ],
        threshold: |i| {
            i.nitrogen >= 50.0
                && i.phosphorus >= 30.0
                && i.potassium >= 40.0
                && i.temperature <= 25.0
        },
        score: |i| 60.0 + (i.nitrogen + i.phosphorus + i.potassium) / 15.0,
        cap: 88.0,
    },
    // Apples - for mountain regions
    CropRule {
        crop: "Apple",
        season: "Perennial",
        expected_yield: "10-15 tons/hectare",
        tips: &[
            "Requires cold winters",
            "Prune regularly",
            "Good for mountain climate",
        ],
        threshold: |i| {
            i.temperature >= 15.0 && i.temperature <= 25.0 && i.rainfall >= 400.0 && i.ph >= 6.0
        },
        score: |i| 70.0 + (i.rainfall - 400.0) / 50.0,
        cap: 85.0,
    },
    // Maize - warm season crop
    CropRule {
        crop: "Maize",
        season: "Summer (Kharif)",
        expected_yield: "4-6 tons/hectare",
        tips: &[
            "Plant after last frost",
            "Requires warm weather",
            "Deep watering needed",
        ],
        threshold: |i| {
            i.nitrogen >= 60.0 && i.potassium >= 40.0 && i.temperature >= 20.0 && i.rainfall >= 500.0
        },
        score: |i| 50.0 + i.nitrogen / 3.0,
        cap: 82.0,
    },
    // Buckwheat - good for poor soils
    CropRule {
        crop: "Buckwheat",
        season: "Summer",
        expected_yield: "1-2 tons/hectare",
        tips: &[
            "Grows in poor soil",
            "Short growing season",
            "Good cover crop",
        ],
        threshold: |i| i.ph >= 5.5 && i.temperature <= 30.0,
        score: |i| 60.0 + (8.0 - i.ph) * 5.0,
        cap: 75.0,
    },
];

/// Score every crop whose thresholds the inputs satisfy and return
/// the top recommendations, best first.
pub fn predict_crops(inputs: &CropInputs) -> Vec<CropSuitability> {
    let mut predictions: Vec<CropSuitability> = CROP_RULES
        .iter()
        .filter(|rule| (rule.threshold)(inputs))
        .map(|rule| CropSuitability {
            crop: rule.crop,
            suitability: (rule.score)(inputs).min(rule.cap),
            season: rule.season,
            expected_yield: rule.expected_yield,
            tips: rule.tips,
        })
        .collect();

    // Stable sort keeps table order on ties, so output is deterministic
    predictions.sort_by(|a, b| {
        b.suitability
            .partial_cmp(&a.suitability)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    predictions.truncate(MAX_RECOMMENDATIONS);
    predictions
}
