//! Validate config command implementation
//!
//! This module implements the `validate-config` command, which checks that
//! an export could start with the resolved configuration.

use crate::config::MigrationConfig;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config: &MigrationConfig) -> anyhow::Result<i32> {
        tracing::info!("Validating configuration");

        println!("🔍 Validating configuration");
        println!();

        match config.validate() {
            Ok(_) => {
                println!("✅ Configuration is valid");
                println!();
                println!("Configuration Summary:");
                println!("  Log Level: {}", config.application.log_level);
                println!("  Trello API: {}", config.trello.base_url);
                println!(
                    "  Board: {}",
                    config.trello.board_id.as_deref().unwrap_or("-")
                );
                println!(
                    "  Story Points Plugin: {}",
                    config
                        .trello
                        .story_points_plugin_id
                        .as_deref()
                        .unwrap_or("not configured")
                );
                match &config.youtrack {
                    Some(youtrack) => println!("  YouTrack API: {}", youtrack.base_url),
                    None => println!("  YouTrack API: not configured"),
                }
                println!("  User Mapping: {}", config.export.users_path);
                println!("  Export File: {}", config.export.output_path);
                println!("  Resolved State: {}", config.export.resolved_state);
                println!("  Columns: {}", config.export.columns.len());
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Configuration validation failed");
                println!("   Error: {e}");
                println!();
                Ok(2) // Configuration error exit code
            }
        }
    }
}
