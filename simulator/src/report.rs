//! Assembly and persistence of the validation report.
//! The report is the single JSON document the harness emits: the integrity
//! score plus the metrics of both simulation scenarios.

use crate::error::SimulatorError;
use iicp::types::constants::PROTOCOL_VERSION;
use iicp::types::PerformanceMetrics;
use iicp::utils::logging;
use serde::Serialize;
use std::fs;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

const METHODOLOGY: &str = "\
Performance figures are produced by a stochastic simulation, not by live \
network measurement. A fixed-weight feedforward transform perturbs a \
QoS-dependent base-latency table; cross-region pairs incur a uniform 2-4x \
penalty and every latency carries 10% Gaussian noise, floored at 10 ms. \
Failure probabilities are derived from a second fixed-weight transform over \
endpoint load and payload features, scaled to a sub-1% baseline. The \
large-scale sweep drives a tick-exact per-second message rate over the whole \
population; the build-pipeline sweep models each trial as two dependent \
pipeline stages whose latencies add and whose outcomes must both succeed. \
All randomness flows through one seeded generator, so every reported figure \
is reproducible from the scenario seed.";

/// Success-rate and latency summary of the large-scale scenario
#[derive(Debug, Clone, Serialize)]
pub struct LargeScaleSummary {
    pub success_rate: f64,
    /// p95 latency in milliseconds
    pub latency_ms: f64,
    pub throughput: f64,
    pub error_count: u64,
}

/// Success-rate and latency summary of the build-pipeline scenario
#[derive(Debug, Clone, Serialize)]
pub struct BuildSystemSummary {
    pub success_rate: f64,
    /// Median trial latency in milliseconds
    pub latency_ms: f64,
    pub error_count: u64,
}

/// The validation report written to disk at the end of a run
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    /// Unix seconds at assembly time
    pub timestamp: u64,
    pub version: String,
    pub integrity_score: f64,
    pub large_scale: LargeScaleSummary,
    pub build_system: BuildSystemSummary,
    pub methodology: String,
}

impl ValidationReport {
    /// Assembles the report from the integrity score and both scenario
    /// metrics records
    pub fn assemble(
        integrity_score: f64,
        large_scale: &PerformanceMetrics,
        build_system: &PerformanceMetrics,
    ) -> Self {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);

        Self {
            timestamp,
            version: PROTOCOL_VERSION.to_string(),
            integrity_score,
            large_scale: LargeScaleSummary {
                success_rate: large_scale.success_rate,
                latency_ms: large_scale.latency_ms,
                throughput: large_scale.throughput_msg_per_sec,
                error_count: large_scale.error_count,
            },
            build_system: BuildSystemSummary {
                success_rate: build_system.success_rate,
                latency_ms: build_system.latency_ms,
                error_count: build_system.error_count,
            },
            methodology: METHODOLOGY.to_string(),
        }
    }

    /// Writes the report as pretty-printed JSON, creating parent directories
    /// as needed
    pub fn save(&self, path: &Path) -> Result<(), SimulatorError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        logging::log("REPORT", &format!("Saved validation report to {}", path.display()));
        Ok(())
    }
}

// ------------------------------------------------------------------------------------------------
// Tests
// ------------------------------------------------------------------------------------------------
