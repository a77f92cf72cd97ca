use crate::config::ConfigError;
use thiserror::Error;

/// Fault taxonomy of the simulator.
///
/// The per-message success flag is simulated business data and never surfaces
/// here; these variants are genuine runtime faults. None of them are retried;
/// each aborts the run and is reported to the caller.
#[derive(Error, Debug)]
pub enum SimulatorError {
    /// Invalid scenario or population parameters
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigError),
    /// The population cannot satisfy a sampling request
    #[error("sampling error: {0}")]
    Sampling(String),
    /// Results could not be written to disk
    #[error("serialization error: {0}")]
    Serialization(#[from] std::io::Error),
}

impl From<serde_json::Error> for SimulatorError {
    fn from(e: serde_json::Error) -> Self {
        SimulatorError::Serialization(e.into())
    }
}
