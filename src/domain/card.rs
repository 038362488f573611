//! Card model
//!
//! A card as returned by the board listing. Only the key is mandatory and
//! typed; every other field is kept as raw JSON and extracted best-effort by
//! the row mapper, so one malformed card cannot fail the whole listing.

use super::ids::ShortLink;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Board card (read-only snapshot)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Stable short identifier, the key of every lookup table
    pub short_link: ShortLink,

    /// Board-scoped sequence number
    #[serde(default)]
    pub id_short: Option<Value>,

    /// Title
    #[serde(default)]
    pub name: Option<Value>,

    /// Free-text description
    #[serde(default)]
    pub desc: Option<Value>,

    /// Due timestamp, `null` when unset
    #[serde(default)]
    pub due: Option<Value>,
}

impl Card {
    /// Create a card with only its key set
    pub fn new(short_link: ShortLink) -> Self {
        Self {
            short_link,
            id_short: None,
            name: None,
            desc: None,
            due: None,
        }
    }

    /// Set the sequence number
    pub fn with_id_short(mut self, id_short: u64) -> Self {
        self.id_short = Some(Value::from(id_short));
        self
    }

    /// Set the title
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(Value::String(name.into()));
        self
    }

    /// Set the description
    pub fn with_desc(mut self, desc: impl Into<String>) -> Self {
        self.desc = Some(Value::String(desc.into()));
        self
    }

    /// Set the due timestamp
    pub fn with_due(mut self, due: impl Into<String>) -> Self {
        self.due = Some(Value::String(due.into()));
        self
    }
}
