//! Configuration schema types

use crate::config::SecretString;
use crate::domain::Column;
use serde::{Deserialize, Serialize};

/// Main configuration
///
/// Every section has defaults so a run can be configured from the
/// environment alone.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MigrationConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Source board configuration
    #[serde(default)]
    pub trello: TrelloConfig,

    /// Destination configuration (only needed by destination commands)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtrack: Option<YouTrackConfig>,

    /// Export settings
    #[serde(default)]
    pub export: ExportConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl MigrationConfig {
    /// Validates everything an export needs
    ///
    /// # Errors
    ///
    /// Returns an error naming the first missing or invalid value
    pub fn validate(&self) -> Result<(), String> {
        self.validate_common()?;
        self.trello.validate()?;
        Ok(())
    }

    /// Validates the settings shared by every command
    ///
    /// Source credentials are not required here so destination-only
    /// commands can run without them.
    pub fn validate_common(&self) -> Result<(), String> {
        self.application.validate()?;
        if let Some(ref youtrack) = self.youtrack {
            youtrack.validate()?;
        }
        self.export.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Returns the destination section, failing when it is absent
    pub fn require_youtrack(&self) -> Result<&YouTrackConfig, String> {
        let youtrack = self.youtrack.as_ref().ok_or_else(|| {
            "youtrack configuration is required (set YOUTRACK_API_BASE_URL and YOUTRACK_PERM_TOKEN)"
                .to_string()
        })?;
        youtrack.validate()?;
        Ok(youtrack)
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Trello (source) configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrelloConfig {
    /// REST API base URL
    #[serde(default = "default_trello_base_url")]
    pub base_url: String,

    /// API key, sent as the `key` query parameter
    #[serde(default)]
    pub api_key: Option<SecretString>,

    /// API token, sent as the `token` query parameter
    #[serde(default)]
    pub api_token: Option<SecretString>,

    /// Board to export
    #[serde(default)]
    pub board_id: Option<String>,

    /// Plugin id of the story-points power-up; story points stay empty when unset
    #[serde(default)]
    pub story_points_plugin_id: Option<String>,

    /// Per-request timeout in seconds; expiry aborts the run
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// Bulk fetch progress is logged every this many cards
    #[serde(default = "default_progress_interval")]
    pub progress_interval: usize,

    /// Result-count limit of the per-card actions request
    #[serde(default = "default_actions_limit")]
    pub actions_limit: u32,
}

impl TrelloConfig {
    fn validate(&self) -> Result<(), String> {
        use secrecy::ExposeSecret;

        validate_url("trello.base_url", &self.base_url)?;

        if self
            .api_key
            .as_ref()
            .map(|k| k.expose_secret().is_empty())
            .unwrap_or(true)
        {
            return Err("trello.api_key is required (TRELLO_API_KEY)".to_string());
        }

        if self
            .api_token
            .as_ref()
            .map(|t| t.expose_secret().is_empty())
            .unwrap_or(true)
        {
            return Err("trello.api_token is required (TRELLO_API_TOKEN)".to_string());
        }

        if self
            .board_id
            .as_ref()
            .map(|b| b.trim().is_empty())
            .unwrap_or(true)
        {
            return Err("trello.board_id is required (TRELLO_BOARD_ID)".to_string());
        }

        if self.timeout_seconds == 0 {
            return Err("trello.timeout_seconds must be > 0".to_string());
        }

        if self.progress_interval == 0 {
            return Err("trello.progress_interval must be > 0".to_string());
        }

        if self.actions_limit == 0 || self.actions_limit > 1000 {
            return Err(format!(
                "trello.actions_limit must be between 1 and 1000, got {}",
                self.actions_limit
            ));
        }

        Ok(())
    }
}

impl Default for TrelloConfig {
    fn default() -> Self {
        Self {
            base_url: default_trello_base_url(),
            api_key: None,
            api_token: None,
            board_id: None,
            story_points_plugin_id: None,
            timeout_seconds: default_timeout_seconds(),
            progress_interval: default_progress_interval(),
            actions_limit: default_actions_limit(),
        }
    }
}

/// YouTrack (destination) configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YouTrackConfig {
    /// REST API base URL (e.g. `https://example.youtrack.cloud/api`)
    pub base_url: String,

    /// Permanent token, sent as a bearer token
    pub perm_token: SecretString,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl YouTrackConfig {
    /// Create a destination section with the default timeout
    pub fn new(base_url: impl Into<String>, perm_token: SecretString) -> Self {
        Self {
            base_url: base_url.into(),
            perm_token,
            timeout_seconds: default_timeout_seconds(),
        }
    }

    fn validate(&self) -> Result<(), String> {
        use secrecy::ExposeSecret;

        validate_url("youtrack.base_url", &self.base_url)?;

        if self.perm_token.expose_secret().is_empty() {
            return Err("youtrack.perm_token cannot be empty (YOUTRACK_PERM_TOKEN)".to_string());
        }

        if self.timeout_seconds == 0 {
            return Err("youtrack.timeout_seconds must be > 0".to_string());
        }

        Ok(())
    }
}

/// Export configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Two-column user mapping file
    #[serde(default = "default_users_path")]
    pub users_path: String,

    /// Export destination, replaced on every successful run
    #[serde(default = "default_output_path")]
    pub output_path: String,

    /// State written to every row
    #[serde(default = "default_resolved_state")]
    pub resolved_state: String,

    /// Ordered column set
    #[serde(default = "default_columns")]
    pub columns: Vec<Column>,
}

impl ExportConfig {
    fn validate(&self) -> Result<(), String> {
        if self.users_path.trim().is_empty() {
            return Err("export.users_path cannot be empty".to_string());
        }

        if self.output_path.trim().is_empty() {
            return Err("export.output_path cannot be empty".to_string());
        }

        if self.columns.is_empty() {
            return Err("export.columns cannot be empty".to_string());
        }

        if !self.columns.contains(&Column::Id) {
            return Err("export.columns must include 'id'".to_string());
        }

        let mut seen = std::collections::HashSet::new();
        for column in &self.columns {
            if !seen.insert(column) {
                return Err(format!(
                    "export.columns lists '{}' more than once",
                    column.label()
                ));
            }
        }

        Ok(())
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            users_path: default_users_path(),
            output_path: default_output_path(),
            resolved_state: default_resolved_state(),
            columns: default_columns(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default = "default_true")]
    pub local_enabled: bool,

    /// Log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// File strategy: `never` (one file per run), `daily` or `hourly`
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    pub(crate) fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["never", "daily", "hourly"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local logging is enabled".into());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: true,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

fn validate_url(field: &str, value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err(format!("{field} cannot be empty"));
    }

    let parsed = url::Url::parse(value).map_err(|e| format!("{field} is not a valid URL: {e}"))?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(format!("{field} must start with http:// or https://"));
    }

    Ok(())
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_trello_base_url() -> String {
    "https://api.trello.com/1".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_progress_interval() -> usize {
    10
}

fn default_actions_limit() -> u32 {
    50
}

fn default_users_path() -> String {
    "assets/users.csv".to_string()
}

fn default_output_path() -> String {
    "assets/trello-board.csv".to_string()
}

fn default_resolved_state() -> String {
    "Done".to_string()
}

fn default_columns() -> Vec<Column> {
    Column::DEFAULT_LAYOUT.to_vec()
}

fn default_true() -> bool {
    true
}

fn default_local_path() -> String {
    "log".to_string()
}

fn default_local_rotation() -> String {
    "never".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::secret_string;

    fn valid_config() -> MigrationConfig {
        let mut config = MigrationConfig::default();
        config.trello.api_key = Some(secret_string("key".to_string()));
        config.trello.api_token = Some(secret_string("token".to_string()));
        config.trello.board_id = Some("board123".to_string());
        config
    }

    #[test]
    fn test_defaults() {
        let config = MigrationConfig::default();
        assert_eq!(config.application.log_level, "info");
        assert_eq!(config.trello.base_url, "https://api.trello.com/1");
        assert_eq!(config.trello.progress_interval, 10);
        assert_eq!(config.export.users_path, "assets/users.csv");
        assert_eq!(config.export.output_path, "assets/trello-board.csv");
        assert_eq!(config.export.resolved_state, "Done");
        assert_eq!(config.export.columns.len(), 10);
        assert!(config.youtrack.is_none());
        assert!(config.logging.local_enabled);
    }

    #[test]
    fn test_valid_config() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_missing_api_key() {
        let mut config = valid_config();
        config.trello.api_key = None;
        let err = config.validate().unwrap_err();
        assert!(err.contains("TRELLO_API_KEY"));
    }

    #[test]
    fn test_empty_api_token() {
        let mut config = valid_config();
        config.trello.api_token = Some(secret_string(String::new()));
        let err = config.validate().unwrap_err();
        assert!(err.contains("TRELLO_API_TOKEN"));
    }

    #[test]
    fn test_missing_board_id() {
        let mut config = valid_config();
        config.trello.board_id = Some("  ".to_string());
        let err = config.validate().unwrap_err();
        assert!(err.contains("TRELLO_BOARD_ID"));
    }

    #[test]
    fn test_invalid_base_url() {
        let mut config = valid_config();
        config.trello.base_url = "ftp://api.trello.com".to_string();
        assert!(config.validate().is_err());

        config.trello.base_url = "not a url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = valid_config();
        config.trello.timeout_seconds = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_columns_must_include_id_once() {
        let mut config = valid_config();
        config.export.columns = vec![Column::Summary];
        assert!(config.validate().is_err());

        config.export.columns = vec![Column::Id, Column::Summary, Column::Summary];
        assert!(config.validate().is_err());

        config.export.columns = vec![];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_log_level() {
        let mut config = valid_config();
        config.application.log_level = "verbose".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_require_youtrack() {
        let mut config = valid_config();
        assert!(config.require_youtrack().is_err());

        config.youtrack = Some(YouTrackConfig {
            base_url: "https://example.youtrack.cloud/api".to_string(),
            perm_token: secret_string("perm:abc".to_string()),
            timeout_seconds: 30,
        });
        assert!(config.require_youtrack().is_ok());
    }

    #[test]
    fn test_invalid_rotation() {
        let mut config = valid_config();
        config.logging.local_rotation = "weekly".to_string();
        assert!(config.validate().is_err());
    }
}
