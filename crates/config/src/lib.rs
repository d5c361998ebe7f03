#![forbid(unsafe_code)]

mod error;
mod heatmap;
mod model;
mod report;
mod scenario;

pub use error::Error;
pub use heatmap::{AxisRange, Heatmap};
pub use model::Model;
pub use report::Report;
pub use scenario::Scenario;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variables with this prefix override file values.
///
/// Sections are separated by a double underscore, e.g.
/// `BATTERY_RISK_MODEL__DECAY_RATE=0.99`.
pub const ENV_PREFIX: &str = "BATTERY_RISK_";

/// Upper bound for `report.max_rows`.
pub const MAX_REPORT_ROWS: usize = 20;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub model: Model,
    pub scenario: Scenario,
    pub report: Report,
    pub heatmap: Heatmap,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the config file at `path` on top of the defaults, then apply
    /// environment overrides and validate the result.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::InvalidPath(path.to_owned()));
        }

        Self::extract(Figment::from(Serialized::defaults(Self::default())).merge(Toml::file(path)))
    }

    /// Defaults with environment overrides applied, for runs without a file.
    pub fn from_env() -> Result<Self, Error> {
        Self::extract(Figment::from(Serialized::defaults(Self::default())))
    }

    fn extract(figment: Figment) -> Result<Self, Error> {
        let config: Self = figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(Box::new)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), Error> {
        let model = &self.model;
        if !(model.decay_rate > 0.0 && model.decay_rate < 1.0) {
            return Err(invalid(format!(
                "model.decay_rate must be in (0, 1), got {}",
                model.decay_rate
            )));
        }
        if !model.capacity_fade_per_cycle.is_finite() || model.capacity_fade_per_cycle < 0.0 {
            return Err(invalid(format!(
                "model.capacity_fade_per_cycle must be a non-negative number, got {}",
                model.capacity_fade_per_cycle
            )));
        }
        if model.demo_cycles == 0 {
            return Err(invalid("model.demo_cycles must be at least 1"));
        }

        let scenario = &self.scenario;
        for (name, value) in [
            ("hot_above", scenario.hot_above),
            ("hot_weight", scenario.hot_weight),
            ("cold_below", scenario.cold_below),
            ("cold_weight", scenario.cold_weight),
            ("heavy_load_above", scenario.heavy_load_above),
            ("heavy_load_weight", scenario.heavy_load_weight),
            ("aggressive_weight", scenario.aggressive_weight),
            ("per_mile_weight", scenario.per_mile_weight),
            ("high_mileage_above", scenario.high_mileage_above),
        ] {
            if !value.is_finite() {
                return Err(invalid(format!(
                    "scenario.{name} must be a finite number, got {value}"
                )));
            }
        }
        if !(0.0..=1.0).contains(&scenario.improvement_factor) {
            return Err(invalid(format!(
                "scenario.improvement_factor must be in [0, 1], got {}",
                scenario.improvement_factor
            )));
        }
        if scenario.cold_below > scenario.hot_above {
            return Err(invalid(format!(
                "scenario.cold_below ({}) must not exceed scenario.hot_above ({})",
                scenario.cold_below, scenario.hot_above
            )));
        }
        if !(1..=4).contains(&scenario.aggressive_from) {
            return Err(invalid(format!(
                "scenario.aggressive_from must be a driving style level in 1..=4, got {}",
                scenario.aggressive_from
            )));
        }

        if self.report.max_rows == 0 || self.report.rows_per_page == 0 {
            return Err(invalid("report.max_rows and report.rows_per_page must be non-zero"));
        }
        if self.report.max_rows > MAX_REPORT_ROWS {
            return Err(invalid(format!(
                "report.max_rows must be at most {MAX_REPORT_ROWS}, got {}",
                self.report.max_rows
            )));
        }

        for (name, axis) in [
            ("heatmap.temperature", &self.heatmap.temperature),
            ("heatmap.load", &self.heatmap.load),
        ] {
            if !(axis.step > 0.0 && axis.start.is_finite() && axis.end.is_finite()) {
                return Err(invalid(format!("{name} needs finite bounds and a positive step")));
            }
            if axis.end < axis.start {
                return Err(invalid(format!("{name}.end is below {name}.start")));
            }
        }

        Ok(())
    }

    /// Render the configuration as a pretty-printed TOML document.
    pub fn to_toml(&self) -> Result<String, Error> {
        Ok(toml_edit::ser::to_string_pretty(self)?)
    }
}

fn invalid(reason: impl Into<String>) -> Error {
    Error::Invalid(reason.into())
}
