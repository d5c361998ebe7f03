use super::export_csv;
use crate::{Error, cli::PredictArgs};
use anyhow::Context;
use config::Config;
use interchange::{TextReport, read_dataset_file, write_results};
use kernel::degradation::{
    CapacityModel, ColumnDefaults, Dataset, DegradationSummary, ExponentialDecayModel,
};
use std::io::Write;
use tracing::info;

pub(super) fn run<W: Write>(
    config: &Config,
    args: &PredictArgs,
    out: &mut W,
) -> anyhow::Result<()> {
    let defaults = ColumnDefaults::new(&config.model);
    let (source, dataset) = match &args.input {
        Some(path) => (
            path.display().to_string(),
            read_dataset_file(path).with_context(|| format!("reading {}", path.display()))?,
        ),
        None => {
            info!(cycles = config.model.demo_cycles, "no dataset given, using demo data");
            (
                "demo".to_owned(),
                Dataset::demo(config.model.demo_cycles, defaults),
            )
        }
    };

    let model = match args.decay_rate {
        Some(rate) => ExponentialDecayModel::with_decay_rate(rate)?,
        None => ExponentialDecayModel::new(config)?,
    };
    let observations = dataset.resolve(defaults)?;
    let rows = model.predict(&observations)?;
    let summary = DegradationSummary::from_rows(&rows).ok_or(Error::NoRows)?;

    writeln!(out, "Dataset: {source} ({} rows)", summary.rows)?;
    writeln!(out, "Decay rate: {}", model.decay_rate())?;
    writeln!(out, "Average risk score: {:.2}%", summary.average_risk)?;
    writeln!(
        out,
        "Lowest predicted capacity: {:.4}",
        summary.min_predicted_capacity
    )?;
    writeln!(out, "Final risk score: {:.2}%", summary.final_risk)?;
    writeln!(out)?;

    writeln!(
        out,
        "{:>8}  {:>10}  {:>10}  {:>8}",
        "cycles", "capacity", "predicted", "risk %"
    )?;
    for row in rows.iter().take(args.rows) {
        writeln!(
            out,
            "{:>8}  {:>10.4}  {:>10.4}  {:>8.2}",
            row.cycle, row.capacity, row.predicted_capacity, row.risk_score
        )?;
    }
    if rows.len() > args.rows {
        writeln!(out, "(showing {} of {} rows)", args.rows, rows.len())?;
    }

    if let Some(path) = &args.csv {
        export_csv(path, |buf| write_results(buf, &rows))?;
    }
    if let Some(path) = &args.report {
        TextReport::new(&config.report)
            .write_to(path, &rows)
            .with_context(|| format!("writing {}", path.display()))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn args() -> PredictArgs {
        PredictArgs {
            input: None,
            decay_rate: None,
            rows: 3,
            csv: None,
            report: None,
        }
    }

    fn run_to_string(args: &PredictArgs) -> anyhow::Result<String> {
        let mut out = Vec::new();
        run(&Config::default(), args, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn demo_run_prints_summary() {
        let text = run_to_string(&args()).unwrap();

        assert!(text.starts_with("Dataset: demo (100 rows)\n"));
        assert!(text.contains("Decay rate: 0.999\n"));
        assert!(text.contains("(showing 3 of 100 rows)"));
    }

    #[test]
    fn writes_requested_exports() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("data.csv");
        std::fs::write(&input, "cycles\n1\n2\n").unwrap();

        let csv: PathBuf = dir.path().join("results.csv");
        let report: PathBuf = dir.path().join("report.txt");
        let args = PredictArgs {
            input: Some(input),
            decay_rate: Some(0.99),
            csv: Some(csv.clone()),
            report: Some(report.clone()),
            ..args()
        };
        let text = run_to_string(&args).unwrap();
        assert!(text.contains("(2 rows)"));

        let results = std::fs::read_to_string(csv).unwrap();
        assert_eq!(results.lines().count(), 3);
        let report = std::fs::read_to_string(report).unwrap();
        assert!(report.contains("Cycle 2 | Capacity:"));
    }

    #[test]
    fn invalid_decay_rate_fails() {
        let args = PredictArgs {
            decay_rate: Some(1.5),
            ..args()
        };
        let err = run_to_string(&args).unwrap_err();
        assert!(err.downcast_ref::<kernel::Error>().is_some());
    }
}
