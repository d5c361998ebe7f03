#![forbid(unsafe_code)]

use crate::Error;
use serde::Serialize;
use std::{fmt, str::FromStr};

/// Coarse usage severity, ordered from gentlest to harshest.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "u8")]
pub enum DrivingStyle {
    Calm = 1,
    Normal = 2,
    Aggressive = 3,
    Extreme = 4,
}

impl DrivingStyle {
    pub const ALL: [DrivingStyle; 4] = [
        DrivingStyle::Calm,
        DrivingStyle::Normal,
        DrivingStyle::Aggressive,
        DrivingStyle::Extreme,
    ];

    pub fn level(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            DrivingStyle::Calm => "Calm",
            DrivingStyle::Normal => "Normal",
            DrivingStyle::Aggressive => "Aggressive",
            DrivingStyle::Extreme => "Extreme",
        }
    }
}

impl From<DrivingStyle> for u8 {
    fn from(style: DrivingStyle) -> Self {
        style.level()
    }
}

impl TryFrom<u8> for DrivingStyle {
    type Error = Error;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|style| style.level() == level)
            .ok_or_else(|| Error::invalid(format!("driving style must be 1..=4, got {level}")))
    }
}

/// Accepts the level (`"3"`) or the name (`"aggressive"`, any case).
impl FromStr for DrivingStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(level) = s.parse::<u8>() {
            return Self::try_from(level);
        }
        Self::ALL
            .into_iter()
            .find(|style| style.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::invalid(format!("unknown driving style `{s}`")))
    }
}

impl fmt::Display for DrivingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Operating conditions of one scenario. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScenarioInput {
    temperature: f64,
    load: f64,
    driving_style: DrivingStyle,
    miles: f64,
}

impl ScenarioInput {
    /// `temperature` in °C, `load` in kg, `miles` driven.
    pub fn new(
        temperature: f64,
        load: f64,
        driving_style: DrivingStyle,
        miles: f64,
    ) -> Result<Self, Error> {
        if !temperature.is_finite() {
            return Err(Error::invalid(format!(
                "temperature must be finite, got {temperature}"
            )));
        }
        for (name, value) in [("load", load), ("miles", miles)] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(Error::invalid(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }
        Ok(Self::new_unchecked(temperature, load, driving_style, miles))
    }

    /// For values known to be valid at compile time.
    pub(crate) const fn new_unchecked(
        temperature: f64,
        load: f64,
        driving_style: DrivingStyle,
        miles: f64,
    ) -> Self {
        Self {
            temperature,
            load,
            driving_style,
            miles,
        }
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn load(&self) -> f64 {
        self.load
    }

    pub fn driving_style(&self) -> DrivingStyle {
        self.driving_style
    }

    pub fn miles(&self) -> f64 {
        self.miles
    }
}
