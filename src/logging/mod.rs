//! Logging and observability
//!
//! Structured logging with console output and an optional per-run JSON log
//! file. The macros below give recurring events a stable field layout.
//!
//! # Example
//!
//! ```no_run
//! use trello2youtrack::logging::init_logging;
//! use trello2youtrack::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config, "export").expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, run_logging_settings, LoggingGuard};

/// Log bulk fetch progress
///
/// # Example
///
/// ```no_run
/// use trello2youtrack::log_fetch_progress;
///
/// log_fetch_progress!("members", 20, 135);
/// ```
#[macro_export]
macro_rules! log_fetch_progress {
    ($kind:expr, $fetched:expr, $total:expr) => {
        tracing::info!(
            kind = %$kind,
            fetched = $fetched,
            total = $total,
            "Fetching card resources"
        );
    };
}

/// Log a masked field extraction failure with the offending payload
///
/// # Example
///
/// ```no_run
/// use trello2youtrack::log_extraction_failure;
///
/// let payload = serde_json::json!({"unexpected": true});
/// log_extraction_failure!("Story Points (integer)", "Ab12", &payload);
/// ```
#[macro_export]
macro_rules! log_extraction_failure {
    ($column:expr, $card:expr, $payload:expr) => {
        tracing::error!(
            column = $column,
            card = %$card,
            payload = %$payload,
            "Field extraction failed, using empty value"
        );
    };
}
