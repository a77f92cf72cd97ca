use once_cell::sync::Lazy;
use std::env;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

static ENABLE_LOGGING: AtomicBool = AtomicBool::new(false);

static LOG_FILE: Lazy<Mutex<Option<File>>> = Lazy::new(|| Mutex::new(None));

/// Initializes logging based on the IICP_LOGGING environment variable.
/// - If IICP_LOGGING=true, logging is enabled.
/// - If IICP_LOGGING=false or not set, logging is disabled.
/// - If IICP_LOG_TO_FILE=true, messages are appended to the file named by
///   IICP_LOG_FILE instead of stdout.
/// - To enable logging in tests, run: IICP_LOGGING=true cargo test -- --nocapture
pub fn init_logging() {
    match env::var("IICP_LOGGING") {
        Ok(value) => {
            match value.as_str() {
                "true" => ENABLE_LOGGING.store(true, Ordering::SeqCst),
                "false" => ENABLE_LOGGING.store(false, Ordering::SeqCst),
                _ => panic!("\nError: IICP_LOGGING environment variable must be 'true' or 'false'\n\nTo run the program, use one of:\n  IICP_LOGGING=true cargo run\n  IICP_LOGGING=false cargo run\n"),
            }
        }
        Err(_) => ENABLE_LOGGING.store(false, Ordering::SeqCst),
    }

    if env::var("IICP_LOG_TO_FILE").map(|v| v == "true").unwrap_or(false) {
        if let Ok(path) = env::var("IICP_LOG_FILE") {
            match OpenOptions::new().create(true).append(true).open(&path) {
                Ok(file) => {
                    if let Ok(mut guard) = LOG_FILE.lock() {
                        *guard = Some(file);
                    }
                }
                Err(e) => eprintln!("Error opening log file {}: {}", path, e),
            }
        }
    }
}

pub fn log(prefix: &str, message: &str) {
    if ENABLE_LOGGING.load(Ordering::SeqCst) {
        if let Ok(mut guard) = LOG_FILE.lock() {
            if let Some(file) = guard.as_mut() {
                let _ = writeln!(file, "  [{}]   {}", prefix, message);
                return;
            }
        }
        println!("  [{}]   {}", prefix, message);
    }
}
