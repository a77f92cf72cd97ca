//! Configuration structs and validation for the IICP simulator.
//! All sizing parameters are passed as call-time arguments; nothing is loaded
//! from a persisted configuration file.

use thiserror::Error;

// ------------------------------------------------------------------------------------------------
// Configuration Structs
// ------------------------------------------------------------------------------------------------

/// Configuration for the synthetic agent and router population.
///
/// This struct defines the population size and the region set agents and
/// routers are distributed over. It is used by both simulation scenarios.
#[derive(Debug, Clone)]
pub struct PopulationConfig {
    /// Number of agents to create
    pub num_agents: usize,
    /// Number of routers to create
    pub num_routers: usize,
    /// Regions agents and routers are distributed over
    pub regions: Vec<String>,
}

/// Configuration for the large-scale message sweep scenario.
#[derive(Debug, Clone)]
pub struct LargeScaleConfig {
    /// Simulated duration in seconds
    pub duration_seconds: u64,
    /// Target total message count across the whole run; the per-second rate
    /// is the integer quotient of this and the duration
    pub target_total_messages: u64,
}

/// Configuration for the two-stage build-pipeline scenario.
#[derive(Debug, Clone)]
pub struct BuildPipelineConfig {
    /// Number of build trials, each consisting of two pipeline stages
    pub num_trials: u64,
}

impl Default for LargeScaleConfig {
    fn default() -> Self {
        Self {
            duration_seconds: 300,
            target_total_messages: 900_000,
        }
    }
}

impl Default for BuildPipelineConfig {
    fn default() -> Self {
        Self { num_trials: 1000 }
    }
}

// ------------------------------------------------------------------------------------------------
// Error Types and Validation
// ------------------------------------------------------------------------------------------------

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

impl PopulationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_agents == 0 {
            return Err(ConfigError::ValidationError(
                "Number of agents must be positive".into(),
            ));
        }
        if self.num_routers == 0 {
            return Err(ConfigError::ValidationError(
                "Number of routers must be positive".into(),
            ));
        }
        if self.regions.is_empty() {
            return Err(ConfigError::ValidationError("Region set must not be empty".into()));
        }
        Ok(())
    }
}

impl LargeScaleConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.duration_seconds == 0 {
            return Err(ConfigError::ValidationError("Duration must be positive".into()));
        }
        if self.target_total_messages == 0 {
            return Err(ConfigError::ValidationError(
                "Target message count must be positive".into(),
            ));
        }
        if self.target_total_messages < self.duration_seconds {
            return Err(ConfigError::ValidationError(
                "Target message count must be at least one per simulated second".into(),
            ));
        }
        Ok(())
    }

    /// Messages emitted per simulated second (integer division, as the
    /// per-second emission rate is tick-exact)
    pub fn messages_per_second(&self) -> u64 {
        self.target_total_messages / self.duration_seconds
    }
}

impl BuildPipelineConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_trials == 0 {
            return Err(ConfigError::ValidationError("Trial count must be positive".into()));
        }
        Ok(())
    }
}

// ------------------------------------------------------------------------------------------------
// Tests
// ------------------------------------------------------------------------------------------------
