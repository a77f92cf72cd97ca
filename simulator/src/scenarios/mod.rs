pub mod sim_build_pipeline;
pub mod sim_large_scale;

use iicp::utils::logging;
use std::env;
use std::fs;

/// Default seed scenario binaries run with; any other seed gives a different
/// but equally reproducible run
pub const DEFAULT_SEED: u64 = 1942;

/// Sets up logging if the ENABLE_LOGS environment variable is set
pub(crate) fn setup_logging(results_dir: &str) {
    if env::var("ENABLE_LOGS").is_ok() {
        // Delete existing log file if it exists
        let log_path = format!("{}/simulation.log", results_dir);
        if let Err(e) = fs::remove_file(&log_path) {
            // Ignore error if file doesn't exist
            if e.kind() != std::io::ErrorKind::NotFound {
                eprintln!("Error deleting log file: {}", e);
            }
        }

        env::set_var("IICP_LOGGING", "true");
        env::set_var("IICP_LOG_TO_FILE", "true");
        env::set_var("IICP_LOG_FILE", log_path);
        logging::init_logging();
    }
}
