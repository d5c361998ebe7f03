#![forbid(unsafe_code)]

use serde::Serialize;

/// One measured point of a capacity curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    /// Charge/discharge cycle, starting at 1.
    pub cycle: u32,
    /// Remaining fraction of rated capacity.
    pub capacity: f64,
}

impl Observation {
    pub fn new(cycle: u32, capacity: f64) -> Self {
        Self { cycle, capacity }
    }
}

/// An [`Observation`] extended with the model's prediction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PredictedObservation {
    #[serde(rename = "cycles")]
    pub cycle: u32,
    pub capacity: f64,
    pub predicted_capacity: f64,
    /// Always `clamp(100 - predicted_capacity * 100, 0, 100)`.
    pub risk_score: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DegradationSummary {
    pub rows: usize,
    pub average_risk: f64,
    pub min_predicted_capacity: f64,
    pub final_risk: f64,
}

impl DegradationSummary {
    /// Summarise a predicted curve. `None` when there are no rows.
    pub fn from_rows(rows: &[PredictedObservation]) -> Option<Self> {
        let last = rows.last()?;
        let total_risk: f64 = rows.iter().map(|row| row.risk_score).sum();
        let min_predicted_capacity = rows
            .iter()
            .map(|row| row.predicted_capacity)
            .fold(f64::INFINITY, f64::min);

        Some(Self {
            rows: rows.len(),
            average_risk: total_risk / rows.len() as f64,
            min_predicted_capacity,
            final_risk: last.risk_score,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cycle: u32, predicted_capacity: f64, risk_score: f64) -> PredictedObservation {
        PredictedObservation {
            cycle,
            capacity: 1.0,
            predicted_capacity,
            risk_score,
        }
    }

    #[test]
    fn summary_of_empty_curve_is_none() {
        assert_eq!(DegradationSummary::from_rows(&[]), None);
    }

    #[test]
    fn summary_averages_risk() {
        let rows = [row(1, 0.9, 10.0), row(2, 0.8, 20.0), row(3, 0.7, 30.0)];
        let summary = DegradationSummary::from_rows(&rows).unwrap();

        assert_eq!(summary.rows, 3);
        assert!((summary.average_risk - 20.0).abs() < 1e-12);
        assert!((summary.min_predicted_capacity - 0.7).abs() < 1e-12);
        assert!((summary.final_risk - 30.0).abs() < 1e-12);
    }
}
