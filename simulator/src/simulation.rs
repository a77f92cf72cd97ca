//! Single-message exchange simulation for the IICP simulator.
//! No message is ever actually sent; latency and success are derived from the
//! base-latency table, the fixed-weight scoring models, and seeded noise.

use crate::config::PopulationConfig;
use crate::error::SimulatorError;
use crate::population::Population;
use crate::scoring::ScoringFunction;
use iicp::types::QoSClass;
use iicp::utils::logging;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};

/// Latency model input width: cross-region flag, QoS priority, network load,
/// payload size, congestion, router efficiency, error rate, time progress,
/// population scale, and a final random network factor
const LATENCY_FEATURES: usize = 10;
const LATENCY_HIDDEN: usize = 5;

/// Failure model input width: normalized latency, payload size, both endpoint
/// load factors, a random error term, and the population scale
const FAILURE_FEATURES: usize = 6;
const FAILURE_HIDDEN: usize = 3;

/// Hard lower bound on any simulated latency, in milliseconds
const LATENCY_FLOOR_MS: f64 = 10.0;

/// Reference population size used to normalize the scale feature
const SCALE_REFERENCE_AGENTS: f64 = 25_000.0;

/// Outcome of one simulated message exchange
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MessageOutcome {
    pub latency_ms: f64,
    pub success: bool,
}

// ------------------------------------------------------------------------------------------------
// Message Simulator
// ------------------------------------------------------------------------------------------------

/// Simulates individual message exchanges against a synthetic population.
///
/// All randomness flows through one seeded generator, so two simulators
/// constructed with the same configuration and seed produce bit-identical
/// outcome sequences for identical call sequences.
pub struct MessageSimulator {
    population: Population,
    latency_model: ScoringFunction,
    failure_model: ScoringFunction,
    simulation_time: f64,
    rng: ChaCha8Rng,
}

impl MessageSimulator {
    /// Creates a simulator with a freshly generated population and scoring
    /// models, all derived from the given seed
    pub fn new(config: &PopulationConfig, seed: u64) -> Result<Self, SimulatorError> {
        config.validate()?;

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let population = Population::generate(config, &mut rng);
        let latency_model = ScoringFunction::new(LATENCY_FEATURES, LATENCY_HIDDEN, &mut rng);
        let failure_model = ScoringFunction::new(FAILURE_FEATURES, FAILURE_HIDDEN, &mut rng);

        logging::log("SIMULATOR", &format!(
            "Created message simulator with {} agents, {} routers, seed {}",
            population.agents.len(),
            population.routers.len(),
            seed
        ));

        Ok(Self {
            population,
            latency_model,
            failure_model,
            simulation_time: 0.0,
            rng,
        })
    }

    /// The population this simulator runs against
    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Advances the simulated clock, read by the latency model's time-progress
    /// feature. Called by the runner once per simulated second.
    pub fn set_simulation_time(&mut self, seconds: f64) {
        self.simulation_time = seconds;
    }

    /// Draws a uniform value from the simulator's seeded generator.
    /// Scenario drivers use this for workload sampling so that a whole run is
    /// reproducible from one seed.
    pub fn sample_uniform(&mut self, low: f64, high: f64) -> f64 {
        self.rng.gen_range(low..high)
    }

    /// Draws a QoS class uniformly from the simulator's seeded generator
    pub fn sample_qos_class(&mut self) -> QoSClass {
        QoSClass::ALL[self.rng.gen_range(0..QoSClass::ALL.len())]
    }

    /// Simulates one message exchange of the given QoS class and payload size.
    ///
    /// Source and destination are two distinct agents drawn uniformly from
    /// the population; a population smaller than two agents cannot satisfy
    /// the distinct-endpoint requirement and fails.
    pub fn simulate_message(
        &mut self,
        qos_class: QoSClass,
        payload_kb: f64,
    ) -> Result<MessageOutcome, SimulatorError> {
        let num_agents = self.population.agents.len();
        if num_agents < 2 {
            return Err(SimulatorError::Sampling(format!(
                "population of {} agents cannot provide distinct source and destination",
                num_agents
            )));
        }

        // Uniform distinct pair. Destination is drawn from the remaining
        // indices, so same-region pairs stay possible; cross-region is purely
        // a region mismatch between the two picks.
        let source_index = self.rng.gen_range(0..num_agents);
        let mut dest_index = self.rng.gen_range(0..num_agents - 1);
        if dest_index >= source_index {
            dest_index += 1;
        }

        let cross_region =
            self.population.agents[source_index].region != self.population.agents[dest_index].region;

        let latency_ms = self.compute_latency(cross_region, qos_class, payload_kb);
        let success = self.compute_success(source_index, dest_index, latency_ms, payload_kb);

        Ok(MessageOutcome { latency_ms, success })
    }

    /// Computes the latency of one message: base latency by QoS class, a
    /// cross-region penalty, the scoring perturbation, and Gaussian noise,
    /// floored at 10 ms
    fn compute_latency(&mut self, cross_region: bool, qos_class: QoSClass, payload_kb: f64) -> f64 {
        let scale_factor = self.population.agents.len() as f64 / SCALE_REFERENCE_AGENTS;

        let features = [
            if cross_region { 1.0 } else { 0.0 },
            qos_class.priority_weight(),
            self.rng.gen_range(0.3..0.9), // network load
            (payload_kb / 100.0).min(1.0),
            self.rng.gen_range(0.1..0.9), // congestion
            self.rng.gen_range(0.8..1.0), // router efficiency
            self.rng.gen_range(0.0..0.3), // error rate
            self.simulation_time / 1000.0,
            scale_factor,
            self.rng.gen_range(0.5..1.0), // random network factor
        ];
        let score = self.latency_model.predict(&features);

        let mut base_latency = qos_class.base_latency_ms();
        if cross_region {
            base_latency *= self.rng.gen_range(2.0..4.0);
        }

        let final_latency = base_latency * (0.5 + score * 2.0);
        let noise = Normal::new(0.0, final_latency * 0.1)
            .expect("valid distribution parameters")
            .sample(&mut self.rng);

        (final_latency + noise).max(LATENCY_FLOOR_MS)
    }

    /// Draws the success of one message against the failure model.
    ///
    /// The 0.01 scaling caps the typical failure rate near 1%; the model
    /// output itself is deliberately left unclamped, so a sufficiently large
    /// score forces guaranteed failure.
    fn compute_success(
        &mut self,
        source_index: usize,
        dest_index: usize,
        latency_ms: f64,
        payload_kb: f64,
    ) -> bool {
        let features = [
            latency_ms / 1000.0,
            payload_kb / 100.0,
            self.population.agents[source_index].load_factor,
            self.population.agents[dest_index].load_factor,
            self.rng.gen_range(0.0..0.1), // network error rate
            self.population.agents.len() as f64 / SCALE_REFERENCE_AGENTS,
        ];
        let failure_score = self.failure_model.predict(&features);

        self.rng.gen::<f64>() > failure_score * 0.01
    }
}

// ------------------------------------------------------------------------------------------------
// Tests
// ------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> PopulationConfig {
        PopulationConfig {
            num_agents: 10,
            num_routers: 2,
            regions: vec!["us-east-1".to_string(), "eu-west-1".to_string()],
        }
    }

    #[test]
    fn latency_respects_floor_across_seeds() {
        for seed in 0..10 {
            let mut simulator =
                MessageSimulator::new(&small_config(), seed).expect("Failed to create simulator");
            for _ in 0..100 {
                let outcome = simulator
                    .simulate_message(QoSClass::Realtime, 1.0)
                    .expect("Failed to simulate message");
                assert!(outcome.latency_ms >= LATENCY_FLOOR_MS);
            }
        }
    }

    #[test]
    fn single_agent_population_fails_sampling() {
        let config = PopulationConfig {
            num_agents: 1,
            num_routers: 1,
            regions: vec!["us-east-1".to_string()],
        };
        let mut simulator = MessageSimulator::new(&config, 5).expect("Failed to create simulator");
        let result = simulator.simulate_message(QoSClass::Batch, 50.0);
        assert!(matches!(result, Err(SimulatorError::Sampling(_))));
    }

    #[test]
    fn identical_seeds_reproduce_outcomes() {
        let config = small_config();
        let mut sim_a = MessageSimulator::new(&config, 1234).expect("Failed to create simulator");
        let mut sim_b = MessageSimulator::new(&config, 1234).expect("Failed to create simulator");

        for _ in 0..50 {
            let a = sim_a
                .simulate_message(QoSClass::Interactive, 10.0)
                .expect("Failed to simulate message");
            let b = sim_b
                .simulate_message(QoSClass::Interactive, 10.0)
                .expect("Failed to simulate message");
            assert_eq!(a.latency_ms.to_bits(), b.latency_ms.to_bits());
            assert_eq!(a.success, b.success);
        }
    }

    #[test]
    fn invalid_population_config_is_rejected() {
        let config = PopulationConfig {
            num_agents: 0,
            num_routers: 1,
            regions: vec!["us-east-1".to_string()],
        };
        assert!(matches!(
            MessageSimulator::new(&config, 0),
            Err(SimulatorError::Configuration(_))
        ));
    }
}
