#![forbid(unsafe_code)]

use super::{Observation, PredictedObservation};
use crate::{Error, risk_from_capacity};
use config::Config;
use tracing::debug;

pub trait CapacityModel: Send + Sync {
    /// Predict capacity and risk for every observation, in input order.
    fn predict(&self, observations: &[Observation]) -> Result<Vec<PredictedObservation>, Error>;
}

/// `predicted = capacity * decay_rate ^ cycle`, evaluated pointwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialDecayModel {
    decay_rate: f64,
}

impl ExponentialDecayModel {
    pub fn new(config: &Config) -> Result<Self, Error> {
        Self::with_decay_rate(config.model.decay_rate)
    }

    pub fn with_decay_rate(decay_rate: f64) -> Result<Self, Error> {
        if !(decay_rate > 0.0 && decay_rate < 1.0) {
            return Err(Error::invalid(format!(
                "decay rate must be in (0, 1), got {decay_rate}"
            )));
        }
        Ok(Self { decay_rate })
    }

    pub fn decay_rate(&self) -> f64 {
        self.decay_rate
    }

    fn predict_one(&self, observation: Observation) -> PredictedObservation {
        let predicted_capacity =
            observation.capacity * self.decay_rate.powf(f64::from(observation.cycle));
        PredictedObservation {
            cycle: observation.cycle,
            capacity: observation.capacity,
            predicted_capacity,
            risk_score: risk_from_capacity(predicted_capacity),
        }
    }
}

impl CapacityModel for ExponentialDecayModel {
    fn predict(&self, observations: &[Observation]) -> Result<Vec<PredictedObservation>, Error> {
        if observations.is_empty() {
            return Err(Error::EmptyInput);
        }

        // Validate everything before producing any output.
        for (row, observation) in observations.iter().enumerate() {
            if observation.cycle == 0 {
                return Err(Error::invalid(format!(
                    "row {}: cycle must be positive",
                    row + 1
                )));
            }
            if !(observation.capacity >= 0.0 && observation.capacity.is_finite()) {
                return Err(Error::invalid(format!(
                    "row {}: capacity must be a non-negative number, got {}",
                    row + 1,
                    observation.capacity
                )));
            }
        }

        let predicted: Vec<_> = observations
            .iter()
            .map(|&observation| self.predict_one(observation))
            .collect();

        debug!(
            rows = predicted.len(),
            decay_rate = self.decay_rate,
            "predicted capacity curve"
        );
        Ok(predicted)
    }
}
