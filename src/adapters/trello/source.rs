//! Card source trait definition
//!
//! Abstracts the read side of the source board so the bulk fetcher can run
//! against the live API or an in-memory fixture.

use crate::domain::ids::ShortLink;
use crate::domain::{Card, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::fmt;

/// Auxiliary per-card resource fetched in bulk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// List the card sits in (used as the sprint label)
    List,
    /// Creation actions (creator and creation date)
    Actions,
    /// Assigned members
    Members,
    /// Power-up data (story points)
    PluginData,
}

impl ResourceKind {
    /// Every kind, in fetch order
    pub const ALL: [ResourceKind; 4] = [
        ResourceKind::List,
        ResourceKind::Actions,
        ResourceKind::Members,
        ResourceKind::PluginData,
    ];

    /// Path segment under `/cards/{shortLink}/`
    pub fn path_segment(&self) -> &'static str {
        match self {
            ResourceKind::List => "list",
            ResourceKind::Actions => "actions",
            ResourceKind::Members => "members",
            ResourceKind::PluginData => "pluginData",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}

/// Read access to a source board
///
/// Implementations report every transport or HTTP failure as an error;
/// callers treat any error as fatal for the run.
#[async_trait]
pub trait CardSource: Send + Sync {
    /// List every card on a board
    async fn board_cards(&self, board_id: &str) -> Result<Vec<Card>>;

    /// Fetch one auxiliary resource of one card as raw JSON
    async fn card_resource(&self, card: &ShortLink, kind: ResourceKind) -> Result<Value>;

    /// Base URL of the API, for diagnostics
    fn base_url(&self) -> &str;
}
