#![forbid(unsafe_code)]

mod dataset;
mod model;
mod types;

pub use dataset::{Column, ColumnDefaults, Dataset};
pub use model::{CapacityModel, ExponentialDecayModel};
pub use types::{DegradationSummary, Observation, PredictedObservation};
