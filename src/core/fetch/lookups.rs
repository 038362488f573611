//! Per-run lookup tables

use super::bulk::BulkFetcher;
use crate::adapters::trello::ResourceKind;
use crate::domain::{Card, Result, ShortLink};
use serde_json::Value;
use std::collections::HashMap;

/// Sub-resources of every card on the board, keyed by short link
///
/// Built fresh for each run and dropped when the export finishes.
#[derive(Debug, Default, Clone)]
pub struct CardLookups {
    pub lists: HashMap<ShortLink, Value>,
    pub actions: HashMap<ShortLink, Value>,
    pub members: HashMap<ShortLink, Value>,
    pub plugin_data: HashMap<ShortLink, Value>,
}

impl CardLookups {
    /// Fetch all four resource kinds, one pass per kind
    pub async fn fetch(fetcher: &BulkFetcher<'_>, cards: &[Card]) -> Result<Self> {
        let mut lookups = Self::default();
        for kind in ResourceKind::ALL {
            let payloads = fetcher.fetch_bulk(cards, kind).await?;
            *lookups.table_mut(kind) = payloads;
        }
        Ok(lookups)
    }

    fn table_mut(&mut self, kind: ResourceKind) -> &mut HashMap<ShortLink, Value> {
        match kind {
            ResourceKind::List => &mut self.lists,
            ResourceKind::Actions => &mut self.actions,
            ResourceKind::Members => &mut self.members,
            ResourceKind::PluginData => &mut self.plugin_data,
        }
    }

    /// Payload of one kind for a card
    pub fn get(&self, kind: ResourceKind, card: &ShortLink) -> Option<&Value> {
        let table = match kind {
            ResourceKind::List => &self.lists,
            ResourceKind::Actions => &self.actions,
            ResourceKind::Members => &self.members,
            ResourceKind::PluginData => &self.plugin_data,
        };
        table.get(card)
    }

    /// Record a payload, mainly for assembling lookups by hand
    pub fn insert(&mut self, kind: ResourceKind, card: ShortLink, payload: Value) {
        self.table_mut(kind).insert(card, payload);
    }
}
