use iicp::types::constants::PROTOCOL_VERSION;
use iicp::SpecIntegrityChecker;
use simulator::error::SimulatorError;
use simulator::report::ValidationReport;
use simulator::scenarios::{self, DEFAULT_SEED};
use std::path::Path;
use std::process::ExitCode;

const REPORT_PATH: &str = "simulator/results/validation_report.json";

// ------------------------------------------------------------------------------------------------
// Main
// ------------------------------------------------------------------------------------------------

/// Orchestrates the full validation run: integrity analysis, both simulation
/// scenarios, and report assembly
fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Validation run failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), SimulatorError> {
    println!("=== IICP/SYNAPSE v{} Performance Validation ===", PROTOCOL_VERSION);

    // Specification integrity analysis
    let mut checker = SpecIntegrityChecker::new();
    let integrity_score = checker.integrity_score();
    println!("Protocol integrity score: {:.1}%", integrity_score);
    for issue in checker.issues() {
        println!("  Issue: {}", issue);
    }

    // Large-scale population sweep
    println!("Running large-scale simulation...");
    let large_scale = scenarios::sim_large_scale::run(DEFAULT_SEED)?;
    println!(
        "  Success rate: {:.2}%  p95 latency: {:.1} ms  throughput: {:.0} msg/s  errors: {}",
        large_scale.metrics.success_rate,
        large_scale.metrics.latency_ms,
        large_scale.metrics.throughput_msg_per_sec,
        large_scale.metrics.error_count
    );

    // Build-pipeline sweep
    println!("Running build-pipeline simulation...");
    let build_system = scenarios::sim_build_pipeline::run(DEFAULT_SEED)?;
    println!(
        "  Success rate: {:.2}%  median latency: {:.1} ms  errors: {}",
        build_system.metrics.success_rate,
        build_system.metrics.latency_ms,
        build_system.metrics.error_count
    );

    // Report assembly
    let report =
        ValidationReport::assemble(integrity_score, &large_scale.metrics, &build_system.metrics);
    report.save(Path::new(REPORT_PATH))?;
    println!("Validation report saved to {}", REPORT_PATH);

    Ok(())
}
