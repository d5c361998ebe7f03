#![forbid(unsafe_code)]

use config::Config;
use kernel::degradation::{CapacityModel, ExponentialDecayModel, Observation};
use kernel::insight::{Advisor, Insight, suggestions};
use kernel::scenario::{DrivingStyle, ScenarioInput, ScenarioRiskModel, builtin_gallery};
use kernel::{Error, Severity};

fn assert_close(actual: f64, expected: f64) {
    assert!((actual - expected).abs() < 1e-9, "{actual} != {expected}");
}

#[test]
fn worst_case_drive_is_high_risk() {
    let config = Config::default();
    let model = ScenarioRiskModel::new(&config).unwrap();
    let input = ScenarioInput::new(45.0, 400.0, DrivingStyle::Extreme, 100.0).unwrap();

    let comparison = model.compare_designs(&input);
    assert_close(comparison.baseline, 75.0);
    assert_eq!(Severity::from_risk(comparison.baseline), Severity::High);
    assert_eq!(Severity::from_risk(comparison.improved), Severity::High);

    let breakdown: Vec<&str> = model.breakdown(&input).iter().map(|hit| hit.rule).collect();
    assert_eq!(breakdown, ["hot", "heavy_load", "aggressive_driving", "mileage"]);

    let advisor = Advisor::new(&config.scenario).unwrap();
    assert!(advisor.insights(&input).contains(&Insight::HighTemperature));
    assert_eq!(suggestions(comparison.baseline).len(), 3);
}

#[test]
fn cold_calm_drive_is_healthy() {
    let model = ScenarioRiskModel::new(&Config::default()).unwrap();
    let input = ScenarioInput::new(-5.0, 100.0, DrivingStyle::Calm, 50.0).unwrap();

    let risk = model.score(&input);
    assert_close(risk, 20.0);
    assert_eq!(Severity::from_risk(risk), Severity::Healthy);
}

#[test]
fn batch_over_gallery_matches_gallery_rows() {
    let model = ScenarioRiskModel::new(&Config::default()).unwrap();
    let scenarios = builtin_gallery();
    let inputs: Vec<ScenarioInput> = scenarios.iter().map(|s| s.input).collect();

    let batch = model.batch_score(&inputs);
    let gallery = model.gallery(&scenarios);

    for (result, row) in batch.iter().zip(gallery.rows()) {
        assert_close(result.risk, row.baseline);
        assert_close(row.improved, row.baseline * 0.85);
    }
}

#[test]
fn fresh_cell_after_one_cycle() {
    let model = ExponentialDecayModel::with_decay_rate(0.99).unwrap();
    let rows = model.predict(&[Observation::new(1, 1.0)]).unwrap();

    assert_close(rows[0].predicted_capacity, 0.99);
    assert_close(rows[0].risk_score, 1.0);
}

#[test]
fn empty_dataset_fails() {
    let model = ExponentialDecayModel::new(&Config::default()).unwrap();
    assert_eq!(model.predict(&[]), Err(Error::EmptyInput));
}
