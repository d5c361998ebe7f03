#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

/// Thresholds and weights of the additive scenario rules.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Scenario {
    /// Temperature (°C) above which the hot rule fires.
    pub hot_above: f64,
    pub hot_weight: f64,

    /// Temperature (°C) below which the cold rule fires. Never above `hot_above`.
    pub cold_below: f64,
    pub cold_weight: f64,

    /// Load (kg) above which the heavy-load rule fires.
    pub heavy_load_above: f64,
    pub heavy_load_weight: f64,

    /// Lowest driving style level (1..=4) counted as aggressive.
    pub aggressive_from: u8,
    pub aggressive_weight: f64,

    /// Risk points added per mile driven.
    pub per_mile_weight: f64,

    /// Miles above which the high-mileage insight is shown.
    pub high_mileage_above: f64,

    /// Multiplier turning the baseline risk into the improved design's risk.
    pub improvement_factor: f64,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            hot_above: 35.0,
            hot_weight: 25.0,
            cold_below: 0.0,
            cold_weight: 15.0,
            heavy_load_above: 300.0,
            heavy_load_weight: 20.0,
            aggressive_from: 3,
            aggressive_weight: 20.0,
            per_mile_weight: 0.1,
            high_mileage_above: 100.0,
            improvement_factor: 0.85,
        }
    }
}
