#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Model {
    /// Per-cycle capacity retention factor of the exponential decay model.
    ///
    /// Must lie in the open interval (0, 1).
    pub decay_rate: f64,

    /// Linear fade used to synthesise a missing capacity column
    /// (`capacity = 1 - fade * cycle`).
    pub capacity_fade_per_cycle: f64,

    /// Number of cycles in the generated demo dataset.
    pub demo_cycles: u32,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            decay_rate: 0.999,
            capacity_fade_per_cycle: 0.005,
            demo_cycles: 100,
        }
    }
}
