//! Export coordinator - main orchestrator for the export process
//!
//! Runs the whole pipeline for one board: user mapping, card listing, bulk
//! sub-resource fetches, row expansion, ordering and the export write.
//! Every network read completes before the export file is touched, so a
//! failed fetch leaves any previous export in place.

use crate::adapters::csv::{read_user_mapping, write_board};
use crate::adapters::trello::{CardSource, TrelloClient};
use crate::config::MigrationConfig;
use crate::core::export::board::sort_board;
use crate::core::export::summary::ExportSummary;
use crate::core::fetch::{BulkFetcher, CardLookups};
use crate::core::transform::{expand_board, RowContext};
use crate::domain::{MigrationError, Result};
use std::sync::Arc;
use std::time::Instant;

/// Export coordinator
pub struct ExportCoordinator {
    config: MigrationConfig,
    source: Arc<dyn CardSource>,
}

impl ExportCoordinator {
    /// Create a coordinator backed by the Trello REST API
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the configuration is incomplete or
    /// the client cannot be built.
    pub fn new(config: MigrationConfig) -> Result<Self> {
        config.validate().map_err(MigrationError::Configuration)?;
        let client = TrelloClient::new(&config.trello)?;
        Ok(Self::with_source(config, Arc::new(client)))
    }

    /// Create a coordinator reading from any card source
    pub fn with_source(config: MigrationConfig, source: Arc<dyn CardSource>) -> Self {
        Self { config, source }
    }

    /// Execute the export
    ///
    /// 1. Loads the user mapping
    /// 2. Lists the board's cards
    /// 3. Fetches list, actions, members and plugin data for every card
    /// 4. Expands cards into rows and orders them by card number
    /// 5. Replaces the export file
    pub async fn execute_export(&self) -> Result<ExportSummary> {
        let start_time = Instant::now();
        let export = &self.config.export;
        let board_id = self.config.trello.board_id.as_deref().ok_or_else(|| {
            MigrationError::Configuration("trello.board_id is required (TRELLO_BOARD_ID)".into())
        })?;

        tracing::info!(
            board_id = %board_id,
            source = %self.source.base_url(),
            output = %export.output_path,
            "Starting export process"
        );

        let users = read_user_mapping(&export.users_path)?;

        let cards = self.source.board_cards(board_id).await?;
        let fetcher = BulkFetcher::new(self.source.as_ref(), self.config.trello.progress_interval);
        let lookups = CardLookups::fetch(&fetcher, &cards).await?;

        let ctx = RowContext {
            users: &users,
            resolved_state: &export.resolved_state,
            story_points_plugin_id: self.config.trello.story_points_plugin_id.as_deref(),
        };
        let mut board = expand_board(&cards, &lookups, &ctx);
        sort_board(&mut board.rows);

        write_board(&export.output_path, &export.columns, &board.rows)?;

        let mut summary = ExportSummary::new(&export.output_path);
        summary.cards = cards.len();
        summary.rows = board.rows.len();
        summary.cards_without_assignees = board.cards_without_assignees;
        summary.extraction_failures = board.extraction_failures;

        let summary = summary.with_duration(start_time.elapsed());
        summary.log_summary();
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::secret_string;

    #[test]
    fn test_new_rejects_missing_credentials() {
        let config = MigrationConfig::default();
        let result = ExportCoordinator::new(config);
        assert!(matches!(result, Err(MigrationError::Configuration(_))));
    }

    #[test]
    fn test_new_with_complete_config() {
        let mut config = MigrationConfig::default();
        config.trello.api_key = Some(secret_string("key".to_string()));
        config.trello.api_token = Some(secret_string("token".to_string()));
        config.trello.board_id = Some("board".to_string());

        assert!(ExportCoordinator::new(config).is_ok());
    }
}
