pub mod cli;
pub mod commands;
mod error;

pub use error::Error;
