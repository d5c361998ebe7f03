#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

/// Inclusive `start..=end` range walked in increments of `step`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct AxisRange {
    pub start: f64,
    pub end: f64,
    pub step: f64,
}

impl AxisRange {
    pub const fn new(start: f64, end: f64, step: f64) -> Self {
        Self { start, end, step }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Heatmap {
    /// Largest grid (temperatures x loads) the sweep accepts.
    pub max_cells: usize,

    pub temperature: AxisRange,
    pub load: AxisRange,
}

impl Default for Heatmap {
    fn default() -> Self {
        Self {
            max_cells: 10_000,
            temperature: AxisRange::new(-10.0, 50.0, 5.0),
            load: AxisRange::new(0.0, 500.0, 25.0),
        }
    }
}
