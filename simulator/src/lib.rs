pub mod config;
pub mod error;
pub mod population;
pub mod report;
pub mod runner;
pub mod scenarios;
pub mod scoring;
pub mod simulation;
pub mod stats;

pub use config::{BuildPipelineConfig, LargeScaleConfig, PopulationConfig};
pub use error::SimulatorError;
pub use population::Population;
pub use report::ValidationReport;
pub use runner::{SimulationResults, SimulationRunner};
pub use scoring::ScoringFunction;
pub use simulation::{MessageOutcome, MessageSimulator};
pub use stats::LatencyStats;
