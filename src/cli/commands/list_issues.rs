//! List issues command implementation
//!
//! This module implements the `list-issues` command, a read-only check of
//! the destination YouTrack connection.

use crate::adapters::youtrack::{YouTrackClient, DEFAULT_ISSUE_FIELDS};
use crate::config::MigrationConfig;
use clap::Args;

/// Arguments for the list-issues command
#[derive(Args, Debug)]
pub struct ListIssuesArgs {
    /// Maximum number of issues to list
    #[arg(long, default_value_t = 10)]
    pub top: usize,

    /// YouTrack field set to request
    #[arg(long, default_value = DEFAULT_ISSUE_FIELDS)]
    pub fields: String,
}

impl ListIssuesArgs {
    /// Execute the list-issues command
    pub async fn execute(&self, config: &MigrationConfig) -> anyhow::Result<i32> {
        tracing::info!(top = self.top, "Listing YouTrack issues");

        let youtrack = match config.require_youtrack() {
            Ok(y) => y,
            Err(e) => {
                tracing::error!(error = %e, "YouTrack configuration invalid");
                eprintln!("Configuration validation failed: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        let client = match YouTrackClient::new(youtrack) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to create YouTrack client");
                eprintln!("Failed to initialize YouTrack client: {e}");
                return Ok(4);
            }
        };

        let issues = match client.list_issues(self.top, &self.fields).await {
            Ok(issues) => issues,
            Err(e) => {
                tracing::error!(error = %e, "Failed to list issues");
                eprintln!("Failed to list issues: {e}");
                return Ok(5); // Fatal error exit code
            }
        };

        println!("📋 Issues at {} ({}):", client.base_url(), issues.len());
        for issue in &issues {
            println!(
                "  {}  {}",
                issue.id_readable.as_deref().unwrap_or(&issue.id),
                issue.summary.as_deref().unwrap_or("")
            );
        }
        println!();

        Ok(0)
    }
}
