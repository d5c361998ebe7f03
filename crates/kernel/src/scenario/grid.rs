#![forbid(unsafe_code)]

use super::DrivingStyle;
use crate::Error;
use config::AxisRange;

/// Ordered, finite axis values of a sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis(Vec<f64>);

impl Axis {
    pub fn new(values: Vec<f64>) -> Result<Self, Error> {
        if let Some(bad) = values.iter().find(|value| !value.is_finite()) {
            return Err(Error::invalid(format!("axis value must be finite, got {bad}")));
        }
        Ok(Self(values))
    }

    /// Inclusive arithmetic progression `start, start + step, ..` up to `end`.
    ///
    /// Fails when the axis would exceed `max_len` values.
    ///
    /// ```
    /// # use config::AxisRange;
    /// # use kernel::scenario::Axis;
    /// let axis = Axis::stepped(&AxisRange::new(-10.0, 10.0, 5.0), 100).unwrap();
    /// assert_eq!(axis.values(), &[-10.0, -5.0, 0.0, 5.0, 10.0]);
    /// ```
    pub fn stepped(range: &AxisRange, max_len: usize) -> Result<Self, Error> {
        let AxisRange { start, end, step } = *range;
        if !(start.is_finite() && end.is_finite() && step.is_finite() && step > 0.0) {
            return Err(Error::invalid(format!(
                "axis needs finite bounds and a positive step, got {start}..={end} by {step}"
            )));
        }
        if end < start {
            return Err(Error::invalid(format!("axis end {end} is below start {start}")));
        }

        // The epsilon keeps `end` on the axis despite rounding in the division.
        let steps = ((end - start) / step + 1e-9).floor();
        if steps >= max_len as f64 {
            return Err(Error::invalid(format!(
                "axis {start}..={end} by {step} has more than {max_len} values"
            )));
        }

        let len = steps as usize + 1;
        Ok(Self((0..len).map(|i| start + step * i as f64).collect()))
    }

    pub fn values(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GridSpec {
    pub temperatures: Axis,
    pub loads: Axis,
    pub driving_style: DrivingStyle,
    pub miles: f64,
}

impl GridSpec {
    pub fn cells(&self) -> usize {
        self.temperatures.len() * self.loads.len()
    }
}

/// Risk table indexed by `(load, temperature)`: one row per load, one
/// column per temperature, both in axis order.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskGrid {
    temperatures: Vec<f64>,
    loads: Vec<f64>,
    rows: Vec<Vec<f64>>,
}

impl RiskGrid {
    /// `cells` holds the rows back to back, so its length must be
    /// `loads.len() * temperatures.len()`.
    pub(crate) fn from_cells(temperatures: Vec<f64>, loads: Vec<f64>, cells: Vec<f64>) -> Self {
        debug_assert_eq!(cells.len(), temperatures.len() * loads.len());
        let rows = cells
            .chunks(temperatures.len().max(1))
            .map(<[f64]>::to_vec)
            .collect();
        Self {
            temperatures,
            loads,
            rows,
        }
    }

    pub fn temperatures(&self) -> &[f64] {
        &self.temperatures
    }

    pub fn loads(&self) -> &[f64] {
        &self.loads
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// `(loads, temperatures)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.loads.len(), self.temperatures.len())
    }

    pub fn get(&self, load_ix: usize, temperature_ix: usize) -> Option<f64> {
        self.rows.get(load_ix)?.get(temperature_ix).copied()
    }

    /// Highest cell as `(load, temperature, risk)`.
    pub fn peak(&self) -> Option<(f64, f64, f64)> {
        let mut peak: Option<(f64, f64, f64)> = None;
        for (row, &load) in self.rows.iter().zip(&self.loads) {
            for (&risk, &temperature) in row.iter().zip(&self.temperatures) {
                if peak.is_none_or(|(_, _, best)| risk > best) {
                    peak = Some((load, temperature, risk));
                }
            }
        }
        peak
    }
}
