use super::export_csv;
use crate::{Error, cli::HeatmapArgs};
use config::Config;
use interchange::write_grid;
use kernel::scenario::{Axis, GridSpec, ScenarioRiskModel};
use std::io::Write;
use tracing::debug;

pub(super) fn run<W: Write>(
    config: &Config,
    args: &HeatmapArgs,
    out: &mut W,
) -> anyhow::Result<()> {
    let max_cells = config.heatmap.max_cells;
    let spec = GridSpec {
        temperatures: Axis::stepped(&config.heatmap.temperature, max_cells)?,
        loads: Axis::stepped(&config.heatmap.load, max_cells)?,
        driving_style: args.style,
        miles: args.miles,
    };
    if spec.cells() > max_cells {
        return Err(Error::GridTooLarge {
            cells: spec.cells(),
            max: max_cells,
        }
        .into());
    }
    debug!(cells = spec.cells(), "sweeping heatmap grid");

    let model = ScenarioRiskModel::new(config)?;
    let grid = model.sweep(&spec)?;

    if let Some(path) = &args.csv {
        export_csv(path, |buf| write_grid(buf, &grid))?;
    } else {
        write!(out, "{:>8}", "load\\°C")?;
        for temperature in grid.temperatures() {
            write!(out, " {temperature:>6}")?;
        }
        writeln!(out)?;
        for (load, row) in grid.loads().iter().zip(grid.rows()) {
            write!(out, "{load:>8}")?;
            for risk in row {
                write!(out, " {risk:>6.1}")?;
            }
            writeln!(out)?;
        }
    }

    if let Some((load, temperature, risk)) = grid.peak() {
        writeln!(
            out,
            "\nPeak risk {risk:.1}% at {temperature} °C and {load} kg ({} driving, {} miles)",
            args.style, args.miles
        )?;
    }

    Ok(())
}
