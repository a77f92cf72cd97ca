//! Synthetic population construction for the IICP simulator.
//! Generates agents and routers with realistic attribute distributions from
//! a seeded generator, so identical seeds yield identical populations.

use crate::config::PopulationConfig;
use iicp::types::constants::INTENT_TYPES;
use iicp::types::{Agent, QoSClass, Router, TransportHint};
use iicp::utils::logging;
use rand::seq::SliceRandom;
use rand::Rng;
use std::time::{SystemTime, UNIX_EPOCH};

// ------------------------------------------------------------------------------------------------
// Population
// ------------------------------------------------------------------------------------------------

/// The set of agents and routers one simulation runs against.
///
/// Created once at simulator construction; agents are read during simulation
/// but never mutated, and router counters are initialized but not exercised
/// by the latency or success computation.
#[derive(Debug, Clone)]
pub struct Population {
    pub agents: Vec<Agent>,
    pub routers: Vec<Router>,
}

impl Population {
    /// Generates a population from the given configuration and generator
    pub fn generate<R: Rng>(config: &PopulationConfig, rng: &mut R) -> Self {
        logging::log("POPULATION", &format!(
            "Generating {} agents and {} routers across {} regions",
            config.num_agents,
            config.num_routers,
            config.regions.len()
        ));

        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);

        let agents = (0..config.num_agents)
            .map(|i| {
                let region = config.regions[rng.gen_range(0..config.regions.len())].clone();
                let num_intents = rng.gen_range(1..=3);
                let supported_intents = INTENT_TYPES
                    .choose_multiple(rng, num_intents)
                    .map(|intent| intent.to_string())
                    .collect();
                Agent {
                    agent_id: format!("llm://agent-{}-{:04}", region, i),
                    region,
                    supported_intents,
                    qos_class: QoSClass::ALL[rng.gen_range(0..QoSClass::ALL.len())],
                    transport_pref: TransportHint::ALL[rng.gen_range(0..TransportHint::ALL.len())],
                    load_factor: rng.gen_range(0.1..0.8),
                    last_heartbeat: now,
                }
            })
            .collect();

        let routers = (0..config.num_routers)
            .map(|i| Router {
                router_id: format!("router-{:03}", i),
                region: config.regions[rng.gen_range(0..config.regions.len())].clone(),
                queue_depth: 0,
                processed_messages: 0,
                error_count: 0,
                utilization: rng.gen_range(0.2..0.6),
            })
            .collect();

        Self { agents, routers }
    }
}

// ------------------------------------------------------------------------------------------------
// Tests
// ------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    fn test_config() -> PopulationConfig {
        PopulationConfig {
            num_agents: 200,
            num_routers: 10,
            regions: vec!["us-east-1".to_string(), "eu-west-1".to_string()],
        }
    }

    #[test]
    fn agent_ids_are_unique() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let population = Population::generate(&test_config(), &mut rng);
        let ids: HashSet<&str> = population.agents.iter().map(|a| a.agent_id.as_str()).collect();
        assert_eq!(ids.len(), population.agents.len());
    }

    #[test]
    fn attributes_stay_within_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let config = test_config();
        let population = Population::generate(&config, &mut rng);

        assert_eq!(population.agents.len(), config.num_agents);
        assert_eq!(population.routers.len(), config.num_routers);

        for agent in &population.agents {
            assert!(agent.load_factor >= 0.0 && agent.load_factor <= 1.0);
            assert!(!agent.supported_intents.is_empty() && agent.supported_intents.len() <= 3);
            assert!(config.regions.contains(&agent.region));
        }
        for router in &population.routers {
            assert_eq!(router.queue_depth, 0);
            assert_eq!(router.processed_messages, 0);
            assert_eq!(router.error_count, 0);
            assert!(router.utilization >= 0.2 && router.utilization < 0.6);
            assert!(config.regions.contains(&router.region));
        }
    }

    #[test]
    fn identical_seeds_yield_identical_populations() {
        let config = test_config();
        let mut rng_a = ChaCha8Rng::seed_from_u64(99);
        let mut rng_b = ChaCha8Rng::seed_from_u64(99);
        let pop_a = Population::generate(&config, &mut rng_a);
        let pop_b = Population::generate(&config, &mut rng_b);

        for (a, b) in pop_a.agents.iter().zip(pop_b.agents.iter()) {
            assert_eq!(a.agent_id, b.agent_id);
            assert_eq!(a.region, b.region);
            assert_eq!(a.load_factor.to_bits(), b.load_factor.to_bits());
        }
    }
}
