#![forbid(unsafe_code)]

use super::Observation;
use crate::Error;
use std::fmt;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Cycles,
    Capacity,
}

impl Column {
    pub fn name(self) -> &'static str {
        match self {
            Column::Cycles => "cycles",
            Column::Capacity => "capacity",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How absent columns are synthesised.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnDefaults {
    /// A missing capacity column becomes `1 - capacity_fade_per_cycle * cycle`.
    pub capacity_fade_per_cycle: f64,
}

impl ColumnDefaults {
    pub fn new(config: &config::Model) -> Self {
        Self {
            capacity_fade_per_cycle: config.capacity_fade_per_cycle,
        }
    }
}

impl Default for ColumnDefaults {
    fn default() -> Self {
        Self::new(&config::Model::default())
    }
}

/// Column-oriented dataset as supplied by the caller, where either column
/// may be absent.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    len: usize,
    cycles: Option<Vec<i64>>,
    capacities: Option<Vec<f64>>,
}

impl Dataset {
    /// Build a dataset of `len` rows. Present columns must hold exactly
    /// `len` values.
    pub fn new(
        len: usize,
        cycles: Option<Vec<i64>>,
        capacities: Option<Vec<f64>>,
    ) -> Result<Self, Error> {
        for (column, column_len) in [
            (Column::Cycles, cycles.as_ref().map(Vec::len)),
            (Column::Capacity, capacities.as_ref().map(Vec::len)),
        ] {
            if let Some(column_len) = column_len
                && column_len != len
            {
                return Err(Error::invalid(format!(
                    "column `{column}` has {column_len} values but the dataset has {len} rows"
                )));
            }
        }

        Ok(Self {
            len,
            cycles,
            capacities,
        })
    }

    /// Generated dataset: cycles `1..=cycles`, capacity fading linearly.
    pub fn demo(cycles: u32, defaults: ColumnDefaults) -> Self {
        let cycle_values: Vec<i64> = (1..=i64::from(cycles)).collect();
        let capacities = cycle_values
            .iter()
            .map(|&cycle| linear_capacity(cycle, defaults.capacity_fade_per_cycle))
            .collect();

        Self {
            len: cycle_values.len(),
            cycles: Some(cycle_values),
            capacities: Some(capacities),
        }
    }

    pub fn from_observations(observations: &[Observation]) -> Self {
        Self {
            len: observations.len(),
            cycles: Some(observations.iter().map(|o| i64::from(o.cycle)).collect()),
            capacities: Some(observations.iter().map(|o| o.capacity).collect()),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn cycles(&self) -> Result<&[i64], Error> {
        self.cycles
            .as_deref()
            .ok_or(Error::MissingColumn(Column::Cycles))
    }

    pub fn capacities(&self) -> Result<&[f64], Error> {
        self.capacities
            .as_deref()
            .ok_or(Error::MissingColumn(Column::Capacity))
    }

    /// Turn the dataset into validated observations, synthesising any
    /// missing column.
    ///
    /// Missing cycles become `1..=N` in row order. A missing capacity column
    /// is derived from the (possibly synthesised) cycles. Supplied values are
    /// never replaced.
    pub fn resolve(&self, defaults: ColumnDefaults) -> Result<Vec<Observation>, Error> {
        if self.is_empty() {
            return Err(Error::EmptyInput);
        }

        let cycles: Vec<i64> = match self.cycles() {
            Ok(cycles) => cycles.to_vec(),
            Err(Error::MissingColumn(column)) => {
                warn!(%column, rows = self.len, "column missing, numbering rows from 1");
                (1..).take(self.len).collect()
            }
            Err(err) => return Err(err),
        };

        let capacities: Vec<f64> = match self.capacities() {
            Ok(capacities) => capacities.to_vec(),
            Err(Error::MissingColumn(column)) => {
                warn!(
                    %column,
                    fade = defaults.capacity_fade_per_cycle,
                    "column missing, assuming linear fade"
                );
                cycles
                    .iter()
                    .map(|&cycle| linear_capacity(cycle, defaults.capacity_fade_per_cycle))
                    .collect()
            }
            Err(err) => return Err(err),
        };

        cycles
            .into_iter()
            .zip(capacities)
            .enumerate()
            .map(|(row, (cycle, capacity))| {
                let cycle = u32::try_from(cycle)
                    .ok()
                    .filter(|&cycle| cycle > 0)
                    .ok_or_else(|| {
                        Error::invalid(format!(
                            "row {}: cycle must be positive, got {cycle}",
                            row + 1
                        ))
                    })?;
                Ok(Observation::new(cycle, capacity))
            })
            .collect()
    }
}

fn linear_capacity(cycle: i64, fade: f64) -> f64 {
    1.0 - fade * cycle as f64
}
