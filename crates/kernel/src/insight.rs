#![forbid(unsafe_code)]

//! Plain-language advice derived from a scenario and its risk.

use crate::{Error, scenario::DrivingStyle, scenario::ScenarioInput};
use std::fmt;

/// Risk above which design improvements are suggested.
pub const SUGGESTION_THRESHOLD: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Insight {
    HighTemperature,
    LowTemperature,
    HeavyLoad,
    AggressiveDriving,
    HighMileage,
}

impl Insight {
    pub fn message(self) -> &'static str {
        match self {
            Insight::HighTemperature => "High temperature significantly increases risk.",
            Insight::LowTemperature => "Very cold temperature slightly increases risk.",
            Insight::HeavyLoad => "Heavy load contributes to higher battery wear.",
            Insight::AggressiveDriving => "Aggressive driving increases degradation rate.",
            Insight::HighMileage => "High mileage gradually increases risk.",
        }
    }
}

impl fmt::Display for Insight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Trigger thresholds for [`Insight`]s. Every trigger is checked on its own,
/// so any number of insights can apply at once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Advisor {
    hot_above: f64,
    cold_below: f64,
    heavy_load_above: f64,
    aggressive_from: DrivingStyle,
    high_mileage_above: f64,
}

impl Advisor {
    pub fn new(config: &config::Scenario) -> Result<Self, Error> {
        Ok(Self {
            hot_above: config.hot_above,
            cold_below: config.cold_below,
            heavy_load_above: config.heavy_load_above,
            aggressive_from: DrivingStyle::try_from(config.aggressive_from)?,
            high_mileage_above: config.high_mileage_above,
        })
    }

    pub fn insights(&self, input: &ScenarioInput) -> Vec<Insight> {
        [
            (input.temperature() > self.hot_above, Insight::HighTemperature),
            (input.temperature() < self.cold_below, Insight::LowTemperature),
            (input.load() > self.heavy_load_above, Insight::HeavyLoad),
            (input.driving_style() >= self.aggressive_from, Insight::AggressiveDriving),
            (input.miles() > self.high_mileage_above, Insight::HighMileage),
        ]
        .into_iter()
        .filter_map(|(triggered, insight)| triggered.then_some(insight))
        .collect()
    }
}

/// Hypothetical design changes worth trying at this risk level.
pub fn suggestions(risk: f64) -> &'static [&'static str] {
    if risk > SUGGESTION_THRESHOLD {
        &[
            "Consider improved cooling or material to reduce temperature impact.",
            "Reduce heavy load where possible or improve battery load tolerance.",
            "Optimize battery for aggressive driving patterns.",
        ]
    } else {
        &["Battery design is currently healthy under these conditions."]
    }
}
