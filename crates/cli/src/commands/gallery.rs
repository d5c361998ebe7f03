use super::export_csv;
use crate::cli::GalleryArgs;
use config::Config;
use interchange::write_gallery;
use kernel::{
    Severity,
    scenario::{ScenarioRiskModel, builtin_gallery},
};
use std::io::Write;

pub(super) fn run<W: Write>(
    config: &Config,
    args: &GalleryArgs,
    out: &mut W,
) -> anyhow::Result<()> {
    let model = ScenarioRiskModel::new(config)?;
    let gallery = model.gallery(&builtin_gallery());

    writeln!(
        out,
        "{:<26} {:>10} {:>10}  {}",
        "Scenario", "Design A", "Design B", "Band"
    )?;
    for row in gallery.rows() {
        writeln!(
            out,
            "{:<26} {:>9.1}% {:>9.1}%  {}",
            row.name,
            row.baseline,
            row.improved,
            Severity::from_risk(row.baseline)
        )?;
    }

    if let Some(highest) = gallery.highest() {
        writeln!(
            out,
            "\nHighest risk scenario: {} with {:.1}% risk",
            highest.name, highest.baseline
        )?;
    }

    if let Some(path) = &args.csv {
        export_csv(path, |buf| write_gallery(buf, &gallery))?;
    }

    Ok(())
}
