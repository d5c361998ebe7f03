#![forbid(unsafe_code)]

use serde::Serialize;
use std::fmt;

pub const MIN_RISK: f64 = 0.0;
pub const MAX_RISK: f64 = 100.0;

/// Clamp a raw risk value into `[0, 100]`.
///
/// Both bounds are enforced, so rule sets with negative weights still yield
/// a valid percentage.
#[inline]
pub fn clamp_risk(raw: f64) -> f64 {
    raw.clamp(MIN_RISK, MAX_RISK)
}

/// Risk implied by a predicted capacity fraction: the lost share of rated
/// capacity, as a percentage.
///
/// ```
/// # use kernel::risk_from_capacity;
/// assert_eq!(risk_from_capacity(0.75), 25.0);
/// assert_eq!(risk_from_capacity(1.2), 0.0);
/// assert_eq!(risk_from_capacity(-0.5), 100.0);
/// ```
#[inline]
pub fn risk_from_capacity(predicted_capacity: f64) -> f64 {
    clamp_risk(MAX_RISK - predicted_capacity * 100.0)
}

/// Severity band of a risk percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Severity {
    Healthy,
    Moderate,
    High,
}

impl Severity {
    /// Lowest risk classified as [`Severity::Moderate`].
    pub const MODERATE_FROM: f64 = 30.0;
    /// Lowest risk classified as [`Severity::High`].
    pub const HIGH_FROM: f64 = 60.0;

    pub fn from_risk(risk: f64) -> Self {
        if risk < Self::MODERATE_FROM {
            Severity::Healthy
        } else if risk < Self::HIGH_FROM {
            Severity::Moderate
        } else {
            Severity::High
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Severity::Healthy => "Healthy",
            Severity::Moderate => "Moderate",
            Severity::High => "High",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
