//! Crate-level error type
//!
//! Every failure is fatal: the binary reports it and stops before any
//! trajectory is drawn.

use crate::configuration::config::ConfigError;
use crate::configuration::source::SourceUnavailable;
use crate::simulation::physics::SimulationFault;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Source(#[from] SourceUnavailable),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Simulation(#[from] SimulationFault),
}

pub type Result<T> = std::result::Result<T, Error>;
