#![forbid(unsafe_code)]

use super::{DrivingStyle, ScenarioInput};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq)]
pub struct NamedScenario {
    pub name: String,
    pub input: ScenarioInput,
}

impl NamedScenario {
    pub fn new(name: impl Into<String>, input: ScenarioInput) -> Self {
        Self {
            name: name.into(),
            input,
        }
    }
}

/// The stock scenarios shown when the caller supplies none.
pub fn builtin_gallery() -> Vec<NamedScenario> {
    use DrivingStyle::*;

    [
        ("Hot & Aggressive", 45.0, 400.0, Extreme, 100.0),
        ("Cold & Calm", -5.0, 100.0, Calm, 50.0),
        ("Normal Day", 25.0, 200.0, Normal, 80.0),
        ("Heavy Load & Aggressive", 30.0, 450.0, Extreme, 120.0),
        ("Hot & Heavy Load", 40.0, 480.0, Aggressive, 150.0),
    ]
    .into_iter()
    .map(|(name, temperature, load, style, miles)| {
        NamedScenario::new(
            name,
            ScenarioInput::new_unchecked(temperature, load, style, miles),
        )
    })
    .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GalleryRow {
    #[serde(rename = "scenario")]
    pub name: String,
    #[serde(rename = "design_a_risk")]
    pub baseline: f64,
    #[serde(rename = "design_b_risk")]
    pub improved: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Gallery {
    rows: Vec<GalleryRow>,
}

impl Gallery {
    pub fn new(rows: Vec<GalleryRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[GalleryRow] {
        &self.rows
    }

    /// Row with the highest baseline risk; the first one wins a tie.
    pub fn highest(&self) -> Option<&GalleryRow> {
        self.rows.iter().fold(None, |best, row| match best {
            Some(best) if best.baseline >= row.baseline => Some(best),
            _ => Some(row),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::ScenarioRiskModel;
    use config::Config;

    fn row(name: &str, baseline: f64) -> GalleryRow {
        GalleryRow {
            name: name.into(),
            baseline,
            improved: baseline * 0.85,
        }
    }

    #[test]
    fn builtin_gallery_is_valid_input() {
        for scenario in builtin_gallery() {
            let input = scenario.input;
            let rebuilt = ScenarioInput::new(
                input.temperature(),
                input.load(),
                input.driving_style(),
                input.miles(),
            );
            assert_eq!(rebuilt, Ok(input), "{}", scenario.name);
        }
    }

    #[test]
    fn builtin_gallery_scores() {
        let model = ScenarioRiskModel::new(&Config::default()).unwrap();
        let gallery = model.gallery(&builtin_gallery());
        let risks: Vec<f64> = gallery.rows().iter().map(|row| row.baseline).collect();
        let expected = [75.0, 20.0, 8.0, 52.0, 80.0];

        assert_eq!(risks.len(), expected.len());
        for (risk, expected) in risks.iter().zip(expected) {
            assert!((risk - expected).abs() < 1e-9, "{risk} != {expected}");
        }

        let highest = gallery.highest().unwrap();
        assert_eq!(highest.name, "Hot & Heavy Load");
    }

    #[test]
    fn highest_prefers_first_on_tie() {
        let gallery = Gallery::new(vec![row("a", 10.0), row("b", 40.0), row("c", 40.0)]);
        assert_eq!(gallery.highest().map(|row| row.name.as_str()), Some("b"));
    }

    #[test]
    fn empty_gallery_has_no_highest() {
        assert_eq!(Gallery::default().highest(), None);
    }
}
