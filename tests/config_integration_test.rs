//! Integration tests for configuration loading and validation
//!
//! Tests that touch environment variables hold `ENV_MUTEX` so they do not
//! interfere with each other.

use secrecy::ExposeSecret;
use std::io::Write;
use std::sync::Mutex;
use tempfile::NamedTempFile;
use trello2youtrack::config::{load_config, load_from_env, resolve_config};
use trello2youtrack::domain::{Column, MigrationError};

// Mutex to serialize tests that modify environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

const ENV_VARS: &[&str] = &[
    "T2Y_LOG_LEVEL",
    "TRELLO_API_BASE_URL",
    "TRELLO_API_KEY",
    "TRELLO_API_TOKEN",
    "TRELLO_BOARD_ID",
    "TRELLO_STORY_POINTS_PLUGIN_ID",
    "T2Y_TRELLO_TIMEOUT_SECONDS",
    "T2Y_TRELLO_PROGRESS_INTERVAL",
    "YOUTRACK_API_BASE_URL",
    "YOUTRACK_PERM_TOKEN",
    "T2Y_USERS_PATH",
    "T2Y_EXPORT_PATH",
    "T2Y_RESOLVED_STATE",
    "T2Y_LOGGING_LOCAL_ENABLED",
    "T2Y_LOGGING_LOCAL_PATH",
    "TEST_T2Y_BOARD",
];

/// Helper function to clean up environment variables
fn cleanup_env_vars() {
    for var in ENV_VARS {
        std::env::remove_var(var);
    }
}

fn config_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_complete_config() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = config_file(
        r#"
[application]
log_level = "debug"

[trello]
base_url = "https://api.trello.com/1"
api_key = "file-key"
api_token = "file-token"
board_id = "board-42"
story_points_plugin_id = "plugin-7"
timeout_seconds = 12
progress_interval = 25
actions_limit = 100

[youtrack]
base_url = "https://example.youtrack.cloud/api"
perm_token = "perm:file"

[export]
users_path = "data/users.csv"
output_path = "data/out.csv"
resolved_state = "Fixed"
columns = ["id", "summary", "assignee"]

[logging]
local_enabled = false
local_path = "/tmp/t2y"
local_rotation = "daily"
"#,
    );

    let config = load_config(file.path()).unwrap();

    assert_eq!(config.application.log_level, "debug");
    assert_eq!(config.trello.board_id.as_deref(), Some("board-42"));
    assert_eq!(
        config.trello.api_key.as_ref().unwrap().expose_secret(),
        "file-key"
    );
    assert_eq!(config.trello.timeout_seconds, 12);
    assert_eq!(config.trello.progress_interval, 25);
    assert_eq!(config.trello.actions_limit, 100);
    assert_eq!(
        config.youtrack.as_ref().unwrap().base_url,
        "https://example.youtrack.cloud/api"
    );
    assert_eq!(config.export.resolved_state, "Fixed");
    assert_eq!(
        config.export.columns,
        vec![Column::Id, Column::Summary, Column::Assignee]
    );
    assert!(!config.logging.local_enabled);
    assert!(config.validate().is_ok());
}

#[test]
fn test_env_overrides_file() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = config_file(
        r#"
[trello]
api_key = "file-key"
api_token = "file-token"
board_id = "file-board"
"#,
    );

    std::env::set_var("TRELLO_BOARD_ID", "env-board");
    std::env::set_var("TRELLO_API_TOKEN", "env-token");
    std::env::set_var("T2Y_TRELLO_PROGRESS_INTERVAL", "3");
    std::env::set_var("T2Y_RESOLVED_STATE", "Closed");

    let config = load_config(file.path()).unwrap();
    cleanup_env_vars();

    assert_eq!(config.trello.board_id.as_deref(), Some("env-board"));
    assert_eq!(
        config.trello.api_token.as_ref().unwrap().expose_secret(),
        "env-token"
    );
    assert_eq!(
        config.trello.api_key.as_ref().unwrap().expose_secret(),
        "file-key"
    );
    assert_eq!(config.trello.progress_interval, 3);
    assert_eq!(config.export.resolved_state, "Closed");
}

#[test]
fn test_placeholder_substitution() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = config_file(
        r#"
[trello]
# board_id = "${NOT_SET_AND_COMMENTED}"
board_id = "${TEST_T2Y_BOARD}"
"#,
    );

    std::env::set_var("TEST_T2Y_BOARD", "from-placeholder");
    let config = load_config(file.path()).unwrap();
    cleanup_env_vars();

    assert_eq!(config.trello.board_id.as_deref(), Some("from-placeholder"));
}

#[test]
fn test_missing_placeholder_is_error() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = config_file(
        r#"
[trello]
board_id = "${TEST_T2Y_BOARD}"
"#,
    );

    let result = load_config(file.path());
    match result {
        Err(MigrationError::Configuration(message)) => {
            assert!(message.contains("TEST_T2Y_BOARD"));
        }
        other => panic!("Expected configuration error, got {other:?}"),
    }
}

#[test]
fn test_invalid_numeric_override_is_error() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    std::env::set_var("T2Y_TRELLO_TIMEOUT_SECONDS", "soon");
    let result = load_from_env();
    cleanup_env_vars();

    assert!(matches!(result, Err(MigrationError::Configuration(_))));
}

#[test]
fn test_env_only_configuration() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    std::env::set_var("TRELLO_API_KEY", "k");
    std::env::set_var("TRELLO_API_TOKEN", "t");
    std::env::set_var("TRELLO_BOARD_ID", "b");
    std::env::set_var("YOUTRACK_API_BASE_URL", "https://example.youtrack.cloud/api");
    std::env::set_var("YOUTRACK_PERM_TOKEN", "perm:env");

    let config = load_from_env().unwrap();
    cleanup_env_vars();

    assert!(config.validate().is_ok());
    let youtrack = config.require_youtrack().unwrap();
    assert_eq!(youtrack.perm_token.expose_secret(), "perm:env");
}

#[test]
fn test_missing_credentials_fail_validation() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    std::env::set_var("TRELLO_API_KEY", "k");
    let config = load_from_env().unwrap();
    cleanup_env_vars();

    let err = config.validate().unwrap_err();
    assert!(err.contains("TRELLO_API_TOKEN"));
    assert!(config.require_youtrack().is_err());
}

#[test]
fn test_explicit_missing_file_is_error() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let result = resolve_config(Some("/nonexistent/trello2youtrack.toml"));
    assert!(matches!(result, Err(MigrationError::Configuration(_))));
}

#[test]
fn test_invalid_rotation_rejected_at_load() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = config_file(
        r#"
[logging]
local_rotation = "size"
"#,
    );

    assert!(matches!(
        load_config(file.path()),
        Err(MigrationError::Configuration(_))
    ));
}
