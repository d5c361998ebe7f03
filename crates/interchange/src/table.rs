#![forbid(unsafe_code)]

//! Delimited-text exports. Every table starts with a header row, even when
//! it has no data rows.

use crate::Error;
use kernel::{
    degradation::PredictedObservation,
    scenario::{DesignComparison, DrivingStyle, Gallery, RiskGrid, ScenarioInput},
};
use serde::Serialize;
use std::io;

const RESULTS_HEADER: [&str; 4] = ["cycles", "capacity", "predicted_capacity", "risk_score"];
const GALLERY_HEADER: [&str; 3] = ["scenario", "design_a_risk", "design_b_risk"];
const HISTORY_HEADER: [&str; 6] = [
    "temperature",
    "load",
    "driving_style",
    "miles",
    "design_a_risk",
    "design_b_risk",
];

/// One scored scenario with both design risks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HistoryRow {
    pub temperature: f64,
    pub load: f64,
    pub driving_style: DrivingStyle,
    pub miles: f64,
    pub design_a_risk: f64,
    pub design_b_risk: f64,
}

impl HistoryRow {
    pub fn new(input: &ScenarioInput, comparison: &DesignComparison) -> Self {
        Self {
            temperature: input.temperature(),
            load: input.load(),
            driving_style: input.driving_style(),
            miles: input.miles(),
            design_a_risk: comparison.baseline,
            design_b_risk: comparison.improved,
        }
    }
}

pub fn write_results<W: io::Write>(writer: W, rows: &[PredictedObservation]) -> Result<(), Error> {
    write_table(writer, &RESULTS_HEADER, rows)
}

pub fn write_gallery<W: io::Write>(writer: W, gallery: &Gallery) -> Result<(), Error> {
    write_table(writer, &GALLERY_HEADER, gallery.rows())
}

pub fn write_history<W: io::Write>(writer: W, rows: &[HistoryRow]) -> Result<(), Error> {
    write_table(writer, &HISTORY_HEADER, rows)
}

/// Heatmap table: the header holds the temperatures, each row starts with
/// its load.
pub fn write_grid<W: io::Write>(writer: W, grid: &RiskGrid) -> Result<(), Error> {
    let mut writer = csv::Writer::from_writer(writer);

    let header = std::iter::once("load".to_owned())
        .chain(grid.temperatures().iter().map(f64::to_string));
    writer.write_record(header)?;

    for (load, row) in grid.loads().iter().zip(grid.rows()) {
        let record = std::iter::once(load.to_string()).chain(row.iter().map(f64::to_string));
        writer.write_record(record)?;
    }

    writer.flush()?;
    Ok(())
}

fn write_table<W, T>(writer: W, header: &[&str], rows: &[T]) -> Result<(), Error>
where
    W: io::Write,
    T: Serialize,
{
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    writer.write_record(header)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
