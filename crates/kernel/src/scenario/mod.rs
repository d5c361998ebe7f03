#![forbid(unsafe_code)]

mod gallery;
mod grid;
mod input;
mod model;
mod rules;

pub use gallery::{Gallery, GalleryRow, NamedScenario, builtin_gallery};
pub use grid::{Axis, GridSpec, RiskGrid};
pub use input::{DrivingStyle, ScenarioInput};
pub use model::{DesignComparison, ScenarioResult, ScenarioRiskModel};
pub use rules::{Condition, Contribution, Rule, RuleGroup, RuleHit, RuleSet};
