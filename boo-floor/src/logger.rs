//! Logging Infrastructure
//!
//! Structured logging setup for hosts embedding the editor core.

use tracing_subscriber::EnvFilter;

/// Initialize the logger
pub fn init_logger() {
    init_logger_with_level("info");
}

/// Initialize the logger with a fallback level
///
/// `RUST_LOG` wins when set. Repeated initialization is ignored so tests
/// and embedding hosts can both call this freely.
pub fn init_logger_with_level(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false)
        .try_init();
}
