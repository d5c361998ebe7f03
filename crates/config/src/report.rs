#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Report {
    pub title: String,

    /// Rows taken from the head of the results table.
    pub max_rows: usize,

    /// Data lines per page of the text report.
    pub rows_per_page: usize,

    /// Decimal places for capacity and risk values.
    pub precision: usize,
}

impl Default for Report {
    fn default() -> Self {
        Self {
            title: "Battery Simulation Report".into(),
            max_rows: 20,
            rows_per_page: 20,
            precision: 2,
        }
    }
}
