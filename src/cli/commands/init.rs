//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use crate::config::DEFAULT_CONFIG_PATH;
use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing trello2youtrack configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        match fs::write(&self.output, Self::generate_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Create a .env file with your credentials:");
                println!("     - TRELLO_API_KEY, TRELLO_API_TOKEN and TRELLO_BOARD_ID");
                println!("     - TRELLO_STORY_POINTS_PLUGIN_ID (optional)");
                println!("     - YOUTRACK_API_BASE_URL and YOUTRACK_PERM_TOKEN (for list-issues)");
                println!("  3. Fill assets/users.csv with trello,youtrack username pairs");
                println!("  4. Validate configuration: trello2youtrack validate-config");
                println!("  5. Run export: trello2youtrack export");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Generate the sample configuration
    ///
    /// Credentials are left to the environment so the file loads without
    /// every placeholder being set.
    fn generate_config() -> String {
        r#"# trello2youtrack Configuration File
# Trello board to YouTrack import CSV
#
# Every value below can be overridden from the environment, see the
# TRELLO_*, YOUTRACK_* and T2Y_* variables.

# ============================================================================
# Application Settings
# ============================================================================
[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

# ============================================================================
# Trello (source)
# ============================================================================
[trello]
base_url = "https://api.trello.com/1"

# Credentials, preferably from TRELLO_API_KEY / TRELLO_API_TOKEN
# api_key = "${TRELLO_API_KEY}"
# api_token = "${TRELLO_API_TOKEN}"

# Board to export (TRELLO_BOARD_ID)
# board_id = "${TRELLO_BOARD_ID}"

# Plugin id of the story points power-up (TRELLO_STORY_POINTS_PLUGIN_ID)
# story_points_plugin_id = "${TRELLO_STORY_POINTS_PLUGIN_ID}"

# Per-request timeout in seconds; expiry aborts the run
timeout_seconds = 30

# Log fetch progress every N cards
progress_interval = 10

# Maximum creation actions requested per card (1-1000)
actions_limit = 50

# ============================================================================
# YouTrack (destination), only needed by list-issues
# ============================================================================
# [youtrack]
# base_url = "https://example.youtrack.cloud/api"
# perm_token = "${YOUTRACK_PERM_TOKEN}"
# timeout_seconds = 30

# ============================================================================
# Export
# ============================================================================
[export]
# Two-column trello,youtrack username table; first line is a header
users_path = "assets/users.csv"

# Export file, replaced on every successful run
output_path = "assets/trello-board.csv"

# State written to every exported row
resolved_state = "Done"

# Column order of the export
columns = [
    "id",
    "author",
    "created",
    "summary",
    "description",
    "state",
    "sprint",
    "story_points",
    "assignee",
    "due_date",
]

# ============================================================================
# Logging
# ============================================================================
[logging]
# Write a JSON log file in addition to the console
local_enabled = true

# Log directory
local_path = "log"

# never = one file per run, daily / hourly = rolling file
local_rotation = "never"
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MigrationConfig;
    use crate::domain::Column;

    #[test]
    fn test_init_args_defaults() {
        let args = InitArgs {
            output: DEFAULT_CONFIG_PATH.to_string(),
            force: false,
        };

        assert_eq!(args.output, "trello2youtrack.toml");
        assert!(!args.force);
    }

    #[test]
    fn test_generated_config_parses() {
        let config: MigrationConfig = toml::from_str(&InitArgs::generate_config()).unwrap();

        assert!(config.youtrack.is_none());
        assert_eq!(config.trello.actions_limit, 50);
        assert_eq!(config.export.resolved_state, "Done");
        assert_eq!(config.export.columns, Column::DEFAULT_LAYOUT.to_vec());
        assert!(config.validate_common().is_ok());
    }

    #[tokio::test]
    async fn test_init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trello2youtrack.toml");
        fs::write(&path, "# existing").unwrap();

        let args = InitArgs {
            output: path.to_string_lossy().to_string(),
            force: false,
        };
        assert_eq!(args.execute().await.unwrap(), 2);
        assert_eq!(fs::read_to_string(&path).unwrap(), "# existing");

        let args = InitArgs {
            output: path.to_string_lossy().to_string(),
            force: true,
        };
        assert_eq!(args.execute().await.unwrap(), 0);
        assert!(fs::read_to_string(&path).unwrap().contains("[trello]"));
    }
}
