#![forbid(unsafe_code)]

use super::{
    Gallery, GalleryRow, GridSpec, NamedScenario, RiskGrid, RuleHit, RuleSet, ScenarioInput,
};
use crate::{Error, clamp_risk};
use config::Config;
use itertools::iproduct;
use serde::Serialize;
use tracing::{debug, trace};

/// Baseline design against the hypothetical improved one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DesignComparison {
    pub baseline: f64,
    pub improved: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScenarioResult {
    pub input: ScenarioInput,
    pub risk: f64,
}

/// Additive rule scoring over scenario parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioRiskModel {
    rules: RuleSet,
    improvement_factor: f64,
}

impl ScenarioRiskModel {
    pub fn new(config: &Config) -> Result<Self, Error> {
        Self::with_rules(
            RuleSet::from_config(&config.scenario)?,
            config.scenario.improvement_factor,
        )
    }

    pub fn with_rules(rules: RuleSet, improvement_factor: f64) -> Result<Self, Error> {
        if !(0.0..=1.0).contains(&improvement_factor) {
            return Err(Error::invalid(format!(
                "improvement factor must be in [0, 1], got {improvement_factor}"
            )));
        }
        Ok(Self {
            rules,
            improvement_factor,
        })
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn breakdown(&self, input: &ScenarioInput) -> Vec<RuleHit> {
        self.rules.evaluate(input)
    }

    /// Risk percentage in `[0, 100]`.
    pub fn score(&self, input: &ScenarioInput) -> f64 {
        clamp_risk(self.rules.raw_score(input))
    }

    pub fn compare_designs(&self, input: &ScenarioInput) -> DesignComparison {
        let baseline = self.score(input);
        DesignComparison {
            baseline,
            improved: baseline * self.improvement_factor,
        }
    }

    pub fn batch_score(&self, inputs: &[ScenarioInput]) -> Vec<ScenarioResult> {
        inputs
            .iter()
            .map(|&input| ScenarioResult {
                input,
                risk: self.score(&input),
            })
            .collect()
    }

    pub fn gallery(&self, scenarios: &[NamedScenario]) -> Gallery {
        let rows = scenarios
            .iter()
            .map(|scenario| {
                let comparison = self.compare_designs(&scenario.input);
                GalleryRow {
                    name: scenario.name.clone(),
                    baseline: comparison.baseline,
                    improved: comparison.improved,
                }
            })
            .collect();
        let gallery = Gallery::new(rows);

        if let Some(highest) = gallery.highest() {
            debug!(
                scenarios = scenarios.len(),
                highest = %highest.name,
                risk = highest.baseline,
                "scored scenario gallery"
            );
        }
        gallery
    }

    /// Score every `(load, temperature)` pair of the grid, holding driving
    /// style and miles fixed.
    pub fn sweep(&self, spec: &GridSpec) -> Result<RiskGrid, Error> {
        let temperatures = spec.temperatures.values();
        let loads = spec.loads.values();
        if temperatures.is_empty() || loads.is_empty() {
            return Err(Error::EmptyInput);
        }

        let cells = iproduct!(loads, temperatures)
            .map(|(&load, &temperature)| {
                ScenarioInput::new(temperature, load, spec.driving_style, spec.miles)
                    .map(|input| self.score(&input))
            })
            .collect::<Result<Vec<f64>, Error>>()?;

        trace!(
            loads = loads.len(),
            temperatures = temperatures.len(),
            "risk grid swept"
        );

        Ok(RiskGrid::from_cells(
            temperatures.to_vec(),
            loads.to_vec(),
            cells,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::{Axis, Condition, Contribution, DrivingStyle, Rule};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn model() -> ScenarioRiskModel {
        ScenarioRiskModel::new(&Config::default()).unwrap()
    }

    fn input(temperature: f64, load: f64, style: DrivingStyle, miles: f64) -> ScenarioInput {
        ScenarioInput::new(temperature, load, style, miles).unwrap()
    }

    #[test]
    fn hot_heavy_extreme_scenario() {
        let risk = model().score(&input(45.0, 400.0, DrivingStyle::Extreme, 100.0));
        assert!((risk - 75.0).abs() < 1e-9);
    }

    #[test]
    fn cold_calm_scenario() {
        let risk = model().score(&input(-5.0, 100.0, DrivingStyle::Calm, 50.0));
        assert!((risk - 20.0).abs() < 1e-9);
    }

    #[test]
    fn score_is_capped_at_100() {
        let risk = model().score(&input(45.0, 400.0, DrivingStyle::Extreme, 1000.0));
        assert_eq!(risk, 100.0);
    }

    #[test]
    fn negative_weights_are_floored_at_zero() {
        let rules = RuleSet::new(vec![Rule {
            name: "bonus",
            condition: Condition::Always,
            contribution: Contribution::Flat(-40.0),
            group: None,
        }])
        .unwrap();
        let model = ScenarioRiskModel::with_rules(rules, 0.85).unwrap();
        assert_eq!(model.score(&input(20.0, 0.0, DrivingStyle::Calm, 0.0)), 0.0);
    }

    #[test]
    fn non_finite_config_weights_never_reach_scoring() {
        for weight in [f64::NAN, f64::INFINITY] {
            let mut config = Config::default();
            config.scenario.per_mile_weight = weight;
            let err = ScenarioRiskModel::new(&config).unwrap_err();
            assert!(matches!(err, Error::InvalidInput(_)), "{err}");
        }
    }

    #[test]
    fn improvement_factor_must_be_a_fraction() {
        let rules = RuleSet::new(Vec::new()).unwrap();
        assert!(ScenarioRiskModel::with_rules(rules.clone(), 1.2).is_err());
        assert!(ScenarioRiskModel::with_rules(rules, -0.1).is_err());
    }

    #[test]
    fn design_comparison_applies_improvement_factor() {
        let comparison = model().compare_designs(&input(45.0, 400.0, DrivingStyle::Extreme, 100.0));
        assert!((comparison.baseline - 75.0).abs() < 1e-9);
        assert!((comparison.improved - 63.75).abs() < 1e-9);
    }

    #[test]
    fn batch_score_matches_single_scores() {
        let model = model();
        let inputs = [
            input(45.0, 400.0, DrivingStyle::Extreme, 100.0),
            input(25.0, 200.0, DrivingStyle::Normal, 80.0),
        ];
        let results = model.batch_score(&inputs);

        assert_eq!(results.len(), 2);
        for (result, input) in results.iter().zip(&inputs) {
            assert_eq!(result.input, *input);
            assert_eq!(result.risk, model.score(input));
        }
    }

    #[test]
    fn sweep_matches_direct_scores() {
        let model = model();
        let spec = GridSpec {
            temperatures: Axis::new(vec![-10.0, 0.0, 10.0]).unwrap(),
            loads: Axis::new(vec![0.0, 300.0]).unwrap(),
            driving_style: DrivingStyle::Normal,
            miles: 0.0,
        };
        let grid = model.sweep(&spec).unwrap();

        assert_eq!(grid.dimensions(), (2, 3));
        for (load_ix, &load) in grid.loads().iter().enumerate() {
            for (temp_ix, &temperature) in grid.temperatures().iter().enumerate() {
                let direct = model.score(&input(temperature, load, DrivingStyle::Normal, 0.0));
                assert_eq!(grid.get(load_ix, temp_ix), Some(direct));
            }
        }
        assert_eq!(grid.rows()[0], vec![15.0, 0.0, 0.0]);
    }

    #[test]
    fn sweep_rejects_empty_axis() {
        let spec = GridSpec {
            temperatures: Axis::new(Vec::new()).unwrap(),
            loads: Axis::new(vec![0.0]).unwrap(),
            driving_style: DrivingStyle::Normal,
            miles: 0.0,
        };
        assert_eq!(model().sweep(&spec), Err(Error::EmptyInput));
    }

    #[test]
    fn sweep_rejects_negative_miles() {
        let spec = GridSpec {
            temperatures: Axis::new(vec![0.0]).unwrap(),
            loads: Axis::new(vec![0.0]).unwrap(),
            driving_style: DrivingStyle::Normal,
            miles: -1.0,
        };
        assert!(matches!(model().sweep(&spec), Err(Error::InvalidInput(_))));
    }

    proptest! {
        #[test]
        fn score_is_non_decreasing_in_miles(
            temperature in -40.0f64..60.0,
            load in 0.0f64..600.0,
            level in 1u8..=4,
            a in 0.0f64..2000.0,
            b in 0.0f64..2000.0,
        ) {
            let style = DrivingStyle::try_from(level).unwrap();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let model = model();
            prop_assert!(
                model.score(&input(temperature, load, style, lo))
                    <= model.score(&input(temperature, load, style, hi))
            );
        }

        #[test]
        fn score_stays_in_bounds(
            temperature in -100.0f64..100.0,
            load in 0.0f64..10_000.0,
            level in 1u8..=4,
            miles in 0.0f64..1e6,
        ) {
            let style = DrivingStyle::try_from(level).unwrap();
            let risk = model().score(&input(temperature, load, style, miles));
            prop_assert!((0.0..=100.0).contains(&risk));
        }

        #[test]
        fn improved_design_never_riskier(
            temperature in -40.0f64..60.0,
            load in 0.0f64..600.0,
            level in 1u8..=4,
            miles in 0.0f64..500.0,
        ) {
            let style = DrivingStyle::try_from(level).unwrap();
            let comparison = model().compare_designs(&input(temperature, load, style, miles));
            prop_assert!(comparison.improved <= comparison.baseline);
        }
    }
}
