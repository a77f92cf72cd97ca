//! Scenario orchestration for the IICP simulator.
//! Drives repeated message simulations, aggregates the outcomes into a
//! metrics record, and reports progress while the loops run.

use crate::config::{BuildPipelineConfig, LargeScaleConfig};
use crate::error::SimulatorError;
use crate::simulation::MessageSimulator;
use crate::stats::LatencyStats;
use iicp::types::PerformanceMetrics;
use iicp::utils::logging;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Instant;

/// Payload size range for large-scale messages, in KB
const PAYLOAD_RANGE_KB: (f64, f64) = (1.0, 500.0);

/// Payload ranges for the two build-pipeline stages, in KB: compiled build
/// artifacts and interpreted packaging output
const STAGE_ONE_PAYLOAD_KB: (f64, f64) = (50.0, 200.0);
const STAGE_TWO_PAYLOAD_KB: (f64, f64) = (30.0, 150.0);

/// Nominal wall-clock window the build pipeline throughput is reported
/// against, in seconds
const BUILD_WINDOW_SECONDS: f64 = 300.0;

/// Synthetic memory usage filler for the metrics record, in MB
const MEMORY_USAGE_MB: f64 = 45.0;

/// Synthetic CPU utilization filler range, in percent
const CPU_UTILIZATION_RANGE: (f64, f64) = (65.0, 85.0);

// ------------------------------------------------------------------------------------------------
// Results
// ------------------------------------------------------------------------------------------------

/// Aggregate outcome of one scenario run
#[derive(Debug, Clone)]
pub struct SimulationResults {
    /// The metrics record handed to the report assembler
    pub metrics: PerformanceMetrics,
    pub total_messages: u64,
    pub successful_messages: u64,
    pub failed_messages: u64,
}

// ------------------------------------------------------------------------------------------------
// Simulation Runner
// ------------------------------------------------------------------------------------------------

/// Runs the two validation scenarios against one message simulator.
///
/// Execution is single-threaded and fully synchronous; a run either completes
/// in full or the first fault aborts it.
pub struct SimulationRunner {
    simulator: MessageSimulator,
}

impl SimulationRunner {
    pub fn new(simulator: MessageSimulator) -> Self {
        Self { simulator }
    }

    /// The simulator this runner drives
    pub fn simulator(&self) -> &MessageSimulator {
        &self.simulator
    }

    /// Runs the large-scale population sweep.
    ///
    /// Emits `target_total_messages / duration_seconds` messages (integer
    /// division) per simulated second, each with a uniformly drawn QoS class
    /// and payload size. Reports p95 latency, the success rate, and the
    /// throughput over the wall-clock elapsed time of the run.
    pub fn run_large_scale(
        &mut self,
        config: &LargeScaleConfig,
    ) -> Result<SimulationResults, SimulatorError> {
        config.validate()?;

        let messages_per_second = config.messages_per_second();
        logging::log("RUNNER", &format!(
            "Starting large-scale run: {} s, {} messages/s, {} agents",
            config.duration_seconds,
            messages_per_second,
            self.simulator.population().agents.len()
        ));

        let progress = ProgressBar::new(config.duration_seconds);
        progress.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} simulated seconds ({eta})")
                .expect("valid progress template")
                .progress_chars("##-"),
        );

        let mut stats = LatencyStats::new();
        let start_time = Instant::now();

        for second in 0..config.duration_seconds {
            self.simulator.set_simulation_time(second as f64);

            for _ in 0..messages_per_second {
                let qos_class = self.simulator.sample_qos_class();
                let payload_kb = self
                    .simulator
                    .sample_uniform(PAYLOAD_RANGE_KB.0, PAYLOAD_RANGE_KB.1);
                let outcome = self.simulator.simulate_message(qos_class, payload_kb)?;
                stats.record(outcome.latency_ms, outcome.success);
            }

            progress.inc(1);
        }
        progress.finish_and_clear();

        let elapsed = start_time.elapsed().as_secs_f64();
        logging::log("RUNNER", &format!(
            "Large-scale run completed: {} messages in {:.1} s",
            stats.total_messages(),
            elapsed
        ));

        Ok(self.assemble_results(
            &stats,
            stats.p95_latency_ms(),
            stats.total_messages() as f64 / elapsed,
        ))
    }

    /// Runs the two-stage build-pipeline sweep.
    ///
    /// Each trial is two independent message simulations (a compiled-language
    /// build stage and an interpreted-language packaging stage); the trial
    /// latency is the sum of the stage latencies and a trial succeeds only
    /// when both stages do. Reports the median trial latency.
    pub fn run_build_pipeline(
        &mut self,
        config: &BuildPipelineConfig,
    ) -> Result<SimulationResults, SimulatorError> {
        config.validate()?;

        logging::log("RUNNER", &format!(
            "Starting build-pipeline run: {} trials, {} agents",
            config.num_trials,
            self.simulator.population().agents.len()
        ));

        let progress = ProgressBar::new(config.num_trials);
        progress.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} build trials ({eta})")
                .expect("valid progress template")
                .progress_chars("##-"),
        );

        let mut stats = LatencyStats::new();

        for _ in 0..config.num_trials {
            let stage_one_qos = self.simulator.sample_qos_class();
            let stage_one_payload = self
                .simulator
                .sample_uniform(STAGE_ONE_PAYLOAD_KB.0, STAGE_ONE_PAYLOAD_KB.1);
            let stage_one = self.simulator.simulate_message(stage_one_qos, stage_one_payload)?;

            let stage_two_qos = self.simulator.sample_qos_class();
            let stage_two_payload = self
                .simulator
                .sample_uniform(STAGE_TWO_PAYLOAD_KB.0, STAGE_TWO_PAYLOAD_KB.1);
            let stage_two = self.simulator.simulate_message(stage_two_qos, stage_two_payload)?;

            stats.record(
                stage_one.latency_ms + stage_two.latency_ms,
                stage_one.success && stage_two.success,
            );
            progress.inc(1);
        }
        progress.finish_and_clear();

        logging::log("RUNNER", &format!(
            "Build-pipeline run completed: {} trials, {} failures",
            stats.total_messages(),
            stats.failed_messages()
        ));

        Ok(self.assemble_results(
            &stats,
            stats.median_latency_ms(),
            stats.total_messages() as f64 / BUILD_WINDOW_SECONDS,
        ))
    }

    fn assemble_results(
        &mut self,
        stats: &LatencyStats,
        latency_ms: f64,
        throughput: f64,
    ) -> SimulationResults {
        let metrics = PerformanceMetrics {
            latency_ms,
            success_rate: stats.success_rate(),
            throughput_msg_per_sec: throughput,
            error_count: stats.failed_messages(),
            cpu_utilization: self
                .simulator
                .sample_uniform(CPU_UTILIZATION_RANGE.0, CPU_UTILIZATION_RANGE.1),
            memory_usage_mb: MEMORY_USAGE_MB,
        };
        SimulationResults {
            metrics,
            total_messages: stats.total_messages(),
            successful_messages: stats.successful_messages(),
            failed_messages: stats.failed_messages(),
        }
    }
}
