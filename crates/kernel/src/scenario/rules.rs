#![forbid(unsafe_code)]

use super::{DrivingStyle, ScenarioInput};
use crate::Error;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Condition {
    TemperatureAbove(f64),
    TemperatureBelow(f64),
    LoadAbove(f64),
    StyleAtLeast(DrivingStyle),
    Always,
}

impl Condition {
    fn threshold(&self) -> Option<f64> {
        match *self {
            Condition::TemperatureAbove(limit)
            | Condition::TemperatureBelow(limit)
            | Condition::LoadAbove(limit) => Some(limit),
            Condition::StyleAtLeast(_) | Condition::Always => None,
        }
    }

    pub fn holds(&self, input: &ScenarioInput) -> bool {
        match *self {
            Condition::TemperatureAbove(limit) => input.temperature() > limit,
            Condition::TemperatureBelow(limit) => input.temperature() < limit,
            Condition::LoadAbove(limit) => input.load() > limit,
            Condition::StyleAtLeast(style) => input.driving_style() >= style,
            Condition::Always => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Contribution {
    /// Fixed number of risk points.
    Flat(f64),
    /// Risk points per mile driven.
    PerMile(f64),
}

impl Contribution {
    fn weight(&self) -> f64 {
        match *self {
            Contribution::Flat(points) => points,
            Contribution::PerMile(weight) => weight,
        }
    }

    pub fn amount(&self, input: &ScenarioInput) -> f64 {
        match *self {
            Contribution::Flat(points) => points,
            Contribution::PerMile(weight) => weight * input.miles(),
        }
    }
}

/// Rules sharing a group are mutually exclusive: only the first matching
/// rule of the group (in table order) contributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleGroup {
    Temperature,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rule {
    pub name: &'static str,
    pub condition: Condition,
    pub contribution: Contribution,
    pub group: Option<RuleGroup>,
}

/// A rule that fired for a given input, with the points it added.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleHit {
    pub rule: &'static str,
    pub points: f64,
}

/// Ordered table of independent predicate/contribution pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Build a rule table. Every threshold and weight must be finite.
    pub fn new(rules: Vec<Rule>) -> Result<Self, Error> {
        for rule in &rules {
            if let Some(limit) = rule.condition.threshold()
                && !limit.is_finite()
            {
                return Err(Error::invalid(format!(
                    "rule {}: threshold must be finite, got {limit}",
                    rule.name
                )));
            }
            let weight = rule.contribution.weight();
            if !weight.is_finite() {
                return Err(Error::invalid(format!(
                    "rule {}: weight must be finite, got {weight}",
                    rule.name
                )));
            }
        }
        Ok(Self { rules })
    }

    /// The standard battery rules with thresholds and weights from config.
    pub fn from_config(config: &config::Scenario) -> Result<Self, Error> {
        let aggressive = DrivingStyle::try_from(config.aggressive_from)?;

        Self::new(vec![
            Rule {
                name: "hot",
                condition: Condition::TemperatureAbove(config.hot_above),
                contribution: Contribution::Flat(config.hot_weight),
                group: Some(RuleGroup::Temperature),
            },
            Rule {
                name: "cold",
                condition: Condition::TemperatureBelow(config.cold_below),
                contribution: Contribution::Flat(config.cold_weight),
                group: Some(RuleGroup::Temperature),
            },
            Rule {
                name: "heavy_load",
                condition: Condition::LoadAbove(config.heavy_load_above),
                contribution: Contribution::Flat(config.heavy_load_weight),
                group: None,
            },
            Rule {
                name: "aggressive_driving",
                condition: Condition::StyleAtLeast(aggressive),
                contribution: Contribution::Flat(config.aggressive_weight),
                group: None,
            },
            Rule {
                name: "mileage",
                condition: Condition::Always,
                contribution: Contribution::PerMile(config.per_mile_weight),
                group: None,
            },
        ])
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Every rule that fires for `input`, in table order.
    pub fn evaluate(&self, input: &ScenarioInput) -> Vec<RuleHit> {
        let mut fired_groups: Vec<RuleGroup> = Vec::new();
        let mut hits = Vec::new();

        for rule in &self.rules {
            if let Some(group) = rule.group
                && fired_groups.contains(&group)
            {
                continue;
            }
            if !rule.condition.holds(input) {
                continue;
            }
            if let Some(group) = rule.group {
                fired_groups.push(group);
            }
            hits.push(RuleHit {
                rule: rule.name,
                points: rule.contribution.amount(input),
            });
        }

        hits
    }

    /// Unclamped sum of all contributions.
    pub fn raw_score(&self, input: &ScenarioInput) -> f64 {
        self.evaluate(input)
            .iter()
            .fold(0.0, |total, hit| total + hit.points)
    }
}
