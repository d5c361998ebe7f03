use super::export_csv;
use crate::cli::{ScenarioArgs, ScoreArgs};
use config::Config;
use interchange::{HistoryRow, write_history};
use kernel::{
    Severity,
    insight::{Advisor, suggestions},
    scenario::{ScenarioInput, ScenarioRiskModel},
};
use std::io::Write;

impl ScenarioArgs {
    pub fn to_input(self) -> Result<ScenarioInput, kernel::Error> {
        ScenarioInput::new(self.temperature, self.load, self.style, self.miles)
    }
}

pub(super) fn run<W: Write>(config: &Config, args: &ScoreArgs, out: &mut W) -> anyhow::Result<()> {
    let input = args.scenario.to_input()?;
    let model = ScenarioRiskModel::new(config)?;
    let advisor = Advisor::new(&config.scenario)?;

    let comparison = model.compare_designs(&input);

    writeln!(
        out,
        "Scenario: {} °C, {} kg, {} driving, {} miles",
        input.temperature(),
        input.load(),
        input.driving_style(),
        input.miles()
    )?;
    writeln!(
        out,
        "Predicted battery failure risk: {:.2}%",
        comparison.baseline
    )?;

    writeln!(out, "\nRule breakdown:")?;
    for hit in model.breakdown(&input) {
        writeln!(out, "  {:<20} {:>+7.2}", hit.rule, hit.points)?;
    }

    writeln!(out, "\nDesign comparison:")?;
    for (name, risk) in [("Design A", comparison.baseline), ("Design B", comparison.improved)] {
        writeln!(out, "  {name}  {risk:>5.1}%  {}", Severity::from_risk(risk))?;
    }

    let insights = advisor.insights(&input);
    if !insights.is_empty() {
        writeln!(out, "\nInsights:")?;
        for insight in insights {
            writeln!(out, "  - {insight}")?;
        }
    }

    writeln!(out, "\nSuggested improvements:")?;
    for suggestion in suggestions(comparison.baseline) {
        writeln!(out, "  - {suggestion}")?;
    }

    if let Some(path) = &args.csv {
        let row = HistoryRow::new(&input, &comparison);
        export_csv(path, |buf| write_history(buf, &[row]))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::scenario::DrivingStyle;

    fn score(temperature: f64, load: f64, style: DrivingStyle, miles: f64) -> String {
        let args = ScoreArgs {
            scenario: ScenarioArgs {
                temperature,
                load,
                style,
                miles,
            },
            csv: None,
        };
        let mut out = Vec::new();
        run(&Config::default(), &args, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn harsh_scenario_report() {
        let text = score(45.0, 400.0, DrivingStyle::Extreme, 100.0);

        assert!(text.contains("Predicted battery failure risk: 75.00%"));
        assert!(text.contains("Design A   75.0%  High"));
        assert!(
            text.lines()
                .any(|line| line.starts_with("  Design B") && line.ends_with("High"))
        );
        assert!(text.contains("High temperature significantly increases risk."));
        assert!(text.contains("Optimize battery for aggressive driving patterns."));
    }

    #[test]
    fn mild_scenario_is_healthy() {
        let text = score(20.0, 100.0, DrivingStyle::Calm, 50.0);

        assert!(text.contains("Design A    5.0%  Healthy"));
        assert!(!text.contains("Insights:"));
        assert!(text.contains("currently healthy"));
    }

    #[test]
    fn rejects_negative_miles() {
        let args = ScoreArgs {
            scenario: ScenarioArgs {
                temperature: 20.0,
                load: 0.0,
                style: DrivingStyle::Calm,
                miles: -1.0,
            },
            csv: None,
        };
        let mut out = Vec::new();
        assert!(run(&Config::default(), &args, &mut out).is_err());
    }

    #[test]
    fn writes_history_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.csv");
        let args = ScoreArgs {
            scenario: ScenarioArgs {
                temperature: -5.0,
                load: 100.0,
                style: DrivingStyle::Calm,
                miles: 50.0,
            },
            csv: Some(path.clone()),
        };
        let mut out = Vec::new();
        run(&Config::default(), &args, &mut out).unwrap();

        let csv = std::fs::read_to_string(path).unwrap();
        assert!(
            csv.starts_with("temperature,load,driving_style,miles,design_a_risk,design_b_risk\n")
        );
        assert_eq!(csv.lines().count(), 2);
    }
}
