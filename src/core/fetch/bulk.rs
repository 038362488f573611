//! Per-resource bulk fetching
//!
//! Requests are batched by resource kind rather than by card: each pass
//! walks the whole card list once for a single kind, so a board costs
//! `cards × kinds` sequential round-trips over one shared connection.

use crate::adapters::trello::{CardSource, ResourceKind};
use crate::domain::{Card, Result, ShortLink};
use crate::log_fetch_progress;
use serde_json::Value;
use std::collections::HashMap;

/// Fetches one sub-resource kind for every card of a board
pub struct BulkFetcher<'a> {
    source: &'a dyn CardSource,
    progress_interval: usize,
}

impl<'a> BulkFetcher<'a> {
    /// Create a fetcher reporting progress every `progress_interval` cards
    pub fn new(source: &'a dyn CardSource, progress_interval: usize) -> Self {
        Self {
            source,
            progress_interval: progress_interval.max(1),
        }
    }

    /// Fetch `kind` for every card, keyed by short link
    ///
    /// All or nothing: the first failed request aborts the batch and its
    /// error is returned.
    pub async fn fetch_bulk(
        &self,
        cards: &[Card],
        kind: ResourceKind,
    ) -> Result<HashMap<ShortLink, Value>> {
        let total = cards.len();
        let mut payloads = HashMap::with_capacity(total);

        for (position, card) in cards.iter().enumerate() {
            let payload = self
                .source
                .card_resource(&card.short_link, kind)
                .await
                .map_err(|e| {
                    tracing::error!(
                        kind = %kind,
                        card = %card.short_link,
                        error = %e,
                        "Bulk fetch aborted"
                    );
                    e
                })?;
            payloads.insert(card.short_link.clone(), payload);

            let fetched = position + 1;
            if fetched % self.progress_interval == 0 && fetched < total {
                log_fetch_progress!(kind, fetched, total);
            }
        }

        log_fetch_progress!(kind, total, total);
        Ok(payloads)
    }
}
