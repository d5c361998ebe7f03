#![forbid(unsafe_code)]

pub mod degradation;
mod error;
pub mod insight;
pub mod risk;
pub mod scenario;

pub use error::Error;
pub use risk::{Severity, clamp_risk, risk_from_capacity};
