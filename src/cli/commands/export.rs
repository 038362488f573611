//! Export command implementation
//!
//! This module implements the `export` command, which writes a board's
//! cards to the YouTrack import CSV.

use crate::config::MigrationConfig;
use crate::core::export::ExportCoordinator;
use clap::Args;

/// Arguments for the export command
#[derive(Args, Debug, Default)]
pub struct ExportArgs {
    /// Override the Trello board to export
    #[arg(long)]
    pub board_id: Option<String>,

    /// Override the export file path
    #[arg(short, long)]
    pub output: Option<String>,

    /// Override the user mapping file path
    #[arg(short, long)]
    pub users: Option<String>,
}

impl ExportArgs {
    /// Apply CLI overrides to the loaded configuration
    pub fn apply_overrides(&self, config: &mut MigrationConfig) {
        if let Some(board_id) = &self.board_id {
            tracing::info!(board_id = %board_id, "Overriding board from CLI");
            config.trello.board_id = Some(board_id.clone());
        }

        if let Some(output) = &self.output {
            tracing::info!(output = %output, "Overriding export path from CLI");
            config.export.output_path = output.clone();
        }

        if let Some(users) = &self.users {
            tracing::info!(users = %users, "Overriding user mapping path from CLI");
            config.export.users_path = users.clone();
        }
    }

    /// Execute the export command
    pub async fn execute(&self, mut config: MigrationConfig) -> anyhow::Result<i32> {
        tracing::info!("Starting export command");

        self.apply_overrides(&mut config);

        // Validate configuration
        if let Err(e) = config.validate() {
            tracing::error!(error = %e, "Configuration validation failed");
            eprintln!("Configuration validation failed: {e}");
            return Ok(2); // Configuration error exit code
        }

        if config.trello.story_points_plugin_id.is_none() {
            tracing::warn!(
                "No story points plugin configured (TRELLO_STORY_POINTS_PLUGIN_ID), story points will be empty"
            );
        }

        tracing::info!("Creating export coordinator");
        let coordinator = match ExportCoordinator::new(config) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to create export coordinator");
                eprintln!("Failed to initialize export: {e}");
                return Ok(4); // Client initialisation exit code
            }
        };

        println!("🚀 Starting export...");
        println!();

        let summary = match coordinator.execute_export().await {
            Ok(s) => s,
            Err(e) => {
                tracing::error!(error = %e, "Export failed");
                eprintln!("Export failed: {e}");
                return Ok(5); // Fatal error exit code
            }
        };

        println!("📊 Export Summary:");
        println!("  Cards: {}", summary.cards);
        println!("  Rows: {}", summary.rows);
        println!(
            "  Cards Without Assignees: {}",
            summary.cards_without_assignees
        );
        println!("  Masked Extraction Failures: {}", summary.extraction_failures);
        println!("  Output: {}", summary.output_path.display());
        println!("  Duration: {:.2}s", summary.duration.as_secs_f64());
        println!();

        if summary.is_clean() {
            println!("✅ Export completed successfully!");
        } else {
            println!("⚠️  Export completed, some fields were left empty (see log)");
        }

        Ok(0)
    }
}
