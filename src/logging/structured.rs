//! Structured logging setup using tracing
//!
//! Diagnostics go to the console and, when enabled, to a JSON log file.

use crate::config::{LoggingConfig, MigrationConfig};
use crate::domain::{MigrationError, Result};
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Guard that must be kept alive for the duration of the program
/// to ensure logs are flushed properly
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
    log_file: Option<PathBuf>,
}

impl LoggingGuard {
    fn new(file_guard: Option<WorkerGuard>, log_file: Option<PathBuf>) -> Self {
        Self {
            _file_guard: file_guard,
            log_file,
        }
    }

    /// Path of the log file opened at startup, if any
    ///
    /// With daily or hourly rotation later events may land in a newer file.
    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }
}

/// Initialize the logging system
///
/// # Arguments
///
/// * `log_level_str` - Log level (trace, debug, info, warn, error)
/// * `config` - Logging configuration
/// * `run_name` - Prefix of the per-run log file (usually the command name)
///
/// # Returns
///
/// A `LoggingGuard` that must be kept alive for the duration of the program
///
/// # Example
///
/// ```no_run
/// use trello2youtrack::logging::init_logging;
/// use trello2youtrack::config::LoggingConfig;
///
/// let config = LoggingConfig::default();
/// let _guard = init_logging("info", &config, "export").expect("Failed to initialize logging");
/// ```
pub fn init_logging(
    log_level_str: &str,
    config: &LoggingConfig,
    run_name: &str,
) -> Result<LoggingGuard> {
    let log_level = parse_log_level(log_level_str)?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("trello2youtrack={log_level}")));

    let mut layers = Vec::new();

    let console_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_filter(env_filter.clone());

    layers.push(console_layer.boxed());

    let (file_guard, log_file) = if config.local_enabled {
        std::fs::create_dir_all(&config.local_path).map_err(|e| {
            MigrationError::Configuration(format!(
                "Failed to create log directory {}: {}",
                config.local_path, e
            ))
        })?;

        let (rotation, prefix, file_name) = log_target(config, run_name, Utc::now());
        let log_file = Path::new(&config.local_path).join(file_name);

        let file_appender = RollingFileAppender::new(rotation, &config.local_path, prefix);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        let file_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_writer(non_blocking)
            .with_filter(env_filter);

        layers.push(file_layer.boxed());
        (Some(guard), Some(log_file))
    } else {
        (None, None)
    };

    tracing_subscriber::registry().with(layers).try_init().map_err(|e| {
        MigrationError::Configuration(format!("Failed to install log subscriber: {e}"))
    })?;

    tracing::info!(
        local_enabled = config.local_enabled,
        log_file = ?log_file,
        "Logging initialized"
    );

    Ok(LoggingGuard::new(file_guard, log_file))
}

/// Rolling file prefix shared by daily and hourly rotation
const ROLLING_PREFIX: &str = "trello2youtrack.log";

/// Rotation policy, appender prefix and name of the file opened at `now`
///
/// `never` yields a fresh timestamped file for every run. Rolling appenders
/// suffix the prefix with the UTC date (and hour).
fn log_target(
    config: &LoggingConfig,
    run_name: &str,
    now: DateTime<Utc>,
) -> (Rotation, String, String) {
    match config.local_rotation.as_str() {
        "daily" => (
            Rotation::DAILY,
            ROLLING_PREFIX.to_string(),
            format!("{ROLLING_PREFIX}.{}", now.format("%Y-%m-%d")),
        ),
        "hourly" => (
            Rotation::HOURLY,
            ROLLING_PREFIX.to_string(),
            format!("{ROLLING_PREFIX}.{}", now.format("%Y-%m-%d-%H")),
        ),
        _ => {
            let name = format!("{run_name}-{}.log", now.format("%Y%m%dT%H%M%SZ"));
            (Rotation::NEVER, name.clone(), name)
        }
    }
}

/// Logging settings for a run, whether or not its configuration loaded
///
/// A failed load falls back to the default settings, which still write the
/// per-run file so the fatal error is kept on disk.
pub fn run_logging_settings(loaded: &Result<MigrationConfig>) -> (LoggingConfig, String) {
    match loaded {
        Ok(config) => (config.logging.clone(), config.application.log_level.clone()),
        Err(_) => (LoggingConfig::default(), "info".to_string()),
    }
}

/// Parse log level from string
fn parse_log_level(level_str: &str) -> Result<Level> {
    match level_str.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(MigrationError::Configuration(format!(
            "Invalid log level: {level_str}. Must be one of: trace, debug, info, warn, error"
        ))),
    }
}
