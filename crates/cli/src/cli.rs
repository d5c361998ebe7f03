use clap::{Args, Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use kernel::scenario::DrivingStyle;
use std::path::{Path, PathBuf};

/// battery-risk: battery degradation risk estimates
///
/// Predicts capacity fade from a cycle/capacity dataset, or scores operating
/// scenarios (temperature, load, driving style, mileage) with additive risk
/// rules. Results are printed and can be exported as CSV or a text report.
#[derive(Debug, Parser, Clone)]
#[command(about, long_about, version)]
pub struct Cli {
    /// Path to configuration file.
    ///
    /// Without it the built-in defaults are used.
    #[arg(short, long, global = true, value_parser = validate_file)]
    pub conffile: Option<PathBuf>,

    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Predict capacity fade and risk for a dataset.
    Predict(PredictArgs),
    /// Score a single operating scenario.
    Score(ScoreArgs),
    /// Score the built-in scenario gallery.
    Gallery(GalleryArgs),
    /// Sweep risk over the temperature x load grid.
    Heatmap(HeatmapArgs),
    /// Print the effective configuration as TOML.
    Config,
}

#[derive(Debug, Args, Clone)]
pub struct PredictArgs {
    /// CSV dataset with `cycles` and/or `capacity` columns.
    ///
    /// Without it a generated demo dataset is used.
    #[arg(short, long, value_parser = validate_file)]
    pub input: Option<PathBuf>,

    /// Override the configured per-cycle decay rate.
    #[arg(short, long)]
    pub decay_rate: Option<f64>,

    /// Number of result rows to print.
    #[arg(long, default_value_t = 10)]
    pub rows: usize,

    /// Write the full results table to this CSV file.
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Write the text report to this file.
    #[arg(long)]
    pub report: Option<PathBuf>,
}

#[derive(Debug, Args, Clone, Copy)]
pub struct ScenarioArgs {
    /// Ambient temperature in °C.
    #[arg(short, long, default_value_t = 25.0, allow_negative_numbers = true)]
    pub temperature: f64,

    /// Carried load in kg.
    #[arg(short, long, default_value_t = 200.0)]
    pub load: f64,

    /// Driving style: 1-4 or calm, normal, aggressive, extreme.
    #[arg(short, long, default_value = "calm")]
    pub style: DrivingStyle,

    /// Miles driven.
    #[arg(short, long, default_value_t = 50.0)]
    pub miles: f64,
}

#[derive(Debug, Args, Clone)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub scenario: ScenarioArgs,

    /// Write the scenario history row to this CSV file.
    #[arg(long)]
    pub csv: Option<PathBuf>,
}

#[derive(Debug, Args, Clone, Default)]
pub struct GalleryArgs {
    /// Write the gallery table to this CSV file.
    #[arg(long)]
    pub csv: Option<PathBuf>,
}

#[derive(Debug, Args, Clone)]
pub struct HeatmapArgs {
    /// Driving style held fixed across the grid.
    #[arg(short, long, default_value = "calm")]
    pub style: DrivingStyle,

    /// Miles held fixed across the grid.
    #[arg(short, long, default_value_t = 50.0)]
    pub miles: f64,

    /// Write the grid to this CSV file instead of printing it.
    #[arg(long)]
    pub csv: Option<PathBuf>,
}

/// Check if the file exists.
#[inline(always)]
fn validate_file(file: &str) -> Result<PathBuf, String> {
    let path = Path::new(file);
    if path.is_file() {
        Ok(path.to_owned())
    } else {
        Err(format!("File not found: {:?}", path))
    }
}
