//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::{MigrationConfig, YouTrackConfig};
use super::secret::secret_string;
use crate::domain::errors::MigrationError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Configuration file picked up when no path is given
pub const DEFAULT_CONFIG_PATH: &str = "trello2youtrack.toml";

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into MigrationConfig
/// 4. Applies environment variable overrides
/// 5. Validates the settings shared by every command
///
/// Source credentials are validated by the commands that need them.
///
/// # Errors
///
/// Returns an error if the file is missing or unreadable, a referenced
/// variable is unset, parsing fails, or validation fails.
///
/// # Examples
///
/// ```no_run
/// use trello2youtrack::config::loader::load_config;
///
/// let config = load_config("trello2youtrack.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<MigrationConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(MigrationError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        MigrationError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: MigrationConfig = toml::from_str(&contents)
        .map_err(|e| MigrationError::Configuration(format!("Failed to parse TOML: {e}")))?;

    apply_env_overrides(&mut config)?;
    validate_loaded(&config)?;

    Ok(config)
}

/// Builds configuration from defaults and environment variables only
///
/// # Errors
///
/// Returns an error if an override is malformed or validation fails.
pub fn load_from_env() -> Result<MigrationConfig> {
    let mut config = MigrationConfig::default();
    apply_env_overrides(&mut config)?;
    validate_loaded(&config)?;
    Ok(config)
}

/// Resolves the configuration for a run
///
/// An explicit path must exist. Without one, [`DEFAULT_CONFIG_PATH`] is used
/// when present, otherwise the environment alone.
pub fn resolve_config(path: Option<&str>) -> Result<MigrationConfig> {
    match path {
        Some(path) => load_config(path),
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => load_config(DEFAULT_CONFIG_PATH),
        None => {
            tracing::debug!("No configuration file found, using environment only");
            load_from_env()
        }
    }
}

fn validate_loaded(config: &MigrationConfig) -> Result<()> {
    config.validate_common().map_err(|e| {
        MigrationError::Configuration(format!("Configuration validation failed: {e}"))
    })
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are copied verbatim.
///
/// # Errors
///
/// Returns an error listing every referenced variable that is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| MigrationError::Configuration(format!("Invalid placeholder pattern: {e}")))?;
    let mut result = String::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{var_name}}}");
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(MigrationError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides
///
/// Credentials and endpoints use the service-named variables
/// (`TRELLO_*`, `YOUTRACK_*`); everything else uses the `T2Y_` prefix.
fn apply_env_overrides(config: &mut MigrationConfig) -> Result<()> {
    // Application overrides
    if let Ok(val) = std::env::var("T2Y_LOG_LEVEL") {
        config.application.log_level = val.to_lowercase();
    }

    // Trello overrides
    if let Ok(val) = std::env::var("TRELLO_API_BASE_URL") {
        config.trello.base_url = val;
    }
    if let Ok(val) = std::env::var("TRELLO_API_KEY") {
        config.trello.api_key = Some(secret_string(val));
    }
    if let Ok(val) = std::env::var("TRELLO_API_TOKEN") {
        config.trello.api_token = Some(secret_string(val));
    }
    if let Ok(val) = std::env::var("TRELLO_BOARD_ID") {
        config.trello.board_id = Some(val);
    }
    if let Ok(val) = std::env::var("TRELLO_STORY_POINTS_PLUGIN_ID") {
        config.trello.story_points_plugin_id = Some(val);
    }
    if let Ok(val) = std::env::var("T2Y_TRELLO_TIMEOUT_SECONDS") {
        config.trello.timeout_seconds = parse_override("T2Y_TRELLO_TIMEOUT_SECONDS", &val)?;
    }
    if let Ok(val) = std::env::var("T2Y_TRELLO_PROGRESS_INTERVAL") {
        config.trello.progress_interval = parse_override("T2Y_TRELLO_PROGRESS_INTERVAL", &val)?;
    }

    // YouTrack overrides
    let youtrack_url = std::env::var("YOUTRACK_API_BASE_URL").ok();
    let youtrack_token = std::env::var("YOUTRACK_PERM_TOKEN").ok();
    if youtrack_url.is_some() || youtrack_token.is_some() {
        let youtrack = config
            .youtrack
            .get_or_insert_with(|| YouTrackConfig::new("", secret_string(String::new())));
        if let Some(url) = youtrack_url {
            youtrack.base_url = url;
        }
        if let Some(token) = youtrack_token {
            youtrack.perm_token = secret_string(token);
        }
    }

    // Export overrides
    if let Ok(val) = std::env::var("T2Y_USERS_PATH") {
        config.export.users_path = val;
    }
    if let Ok(val) = std::env::var("T2Y_EXPORT_PATH") {
        config.export.output_path = val;
    }
    if let Ok(val) = std::env::var("T2Y_RESOLVED_STATE") {
        config.export.resolved_state = val;
    }

    // Logging overrides
    if let Ok(val) = std::env::var("T2Y_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = parse_override("T2Y_LOGGING_LOCAL_ENABLED", &val)?;
    }
    if let Ok(val) = std::env::var("T2Y_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }

    Ok(())
}

fn parse_override<T: std::str::FromStr>(name: &str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| {
        MigrationError::Configuration(format!("Invalid value for {name}: '{value}'"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::Mutex;
    use tempfile::NamedTempFile;

    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn test_substitute_env_vars() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var("T2Y_TEST_SUBST", "value-1");
        let result = substitute_env_vars("api_key = \"${T2Y_TEST_SUBST}\"").unwrap();
        assert_eq!(result, "api_key = \"value-1\"\n");
        std::env::remove_var("T2Y_TEST_SUBST");
    }

    #[test]
    fn test_substitute_env_vars_missing() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var("T2Y_TEST_MISSING");
        let result = substitute_env_vars("api_key = \"${T2Y_TEST_MISSING}\"");
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("T2Y_TEST_MISSING"));
    }

    #[test]
    fn test_substitute_env_vars_skips_comments() {
        let input = "# api_key = \"${T2Y_TEST_NEVER_SET}\"";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result, format!("{input}\n"));
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("does-not-exist.toml");
        assert!(matches!(result, Err(MigrationError::Configuration(_))));
    }

    #[test]
    fn test_load_config_valid() {
        let toml_content = r#"
[application]
log_level = "debug"

[trello]
api_key = "key"
api_token = "token"
board_id = "board1"
story_points_plugin_id = "plugin-1"

[export]
resolved_state = "Closed"
columns = ["id", "summary", "assignee"]
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let _lock = ENV_MUTEX.lock().unwrap();
        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.application.log_level, "debug");
        assert_eq!(config.trello.board_id.as_deref(), Some("board1"));
        assert_eq!(config.export.resolved_state, "Closed");
        assert_eq!(config.export.columns.len(), 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_override_invalid() {
        let result: Result<u64> = parse_override("T2Y_TRELLO_TIMEOUT_SECONDS", "soon");
        assert!(result.is_err());
        let ok: Result<bool> = parse_override("T2Y_LOGGING_LOCAL_ENABLED", " false ");
        assert!(!ok.unwrap());
    }
}
