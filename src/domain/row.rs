//! Export row model
//!
//! One row is emitted per (card, assignee) pair, or a single row for a card
//! without assignees. Rows for the same card share every field except the
//! id suffix and the assignee.

use super::ids::ShortLink;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Export column
///
/// The header label is an opaque string for the destination importer; the
/// parenthesised type hints are not interpreted here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    Id,
    Author,
    Created,
    Summary,
    Description,
    State,
    Sprint,
    StoryPoints,
    Assignee,
    DueDate,
}

impl Column {
    /// Default column order of the board export
    pub const DEFAULT_LAYOUT: [Column; 10] = [
        Column::Id,
        Column::Author,
        Column::Created,
        Column::Summary,
        Column::Description,
        Column::State,
        Column::Sprint,
        Column::StoryPoints,
        Column::Assignee,
        Column::DueDate,
    ];

    /// Header label written to the export
    pub fn label(&self) -> &'static str {
        match self {
            Column::Id => "ID",
            Column::Author => "Author",
            Column::Created => "Created",
            Column::Summary => "Summary",
            Column::Description => "Description",
            Column::State => "State (state)",
            Column::Sprint => "Sprint (version)",
            Column::StoryPoints => "Story Points (integer)",
            Column::Assignee => "Assignee (user)",
            Column::DueDate => "Due Date (date)",
        }
    }

    /// Header line for an ordered column set
    pub fn header(columns: &[Column]) -> Vec<&'static str> {
        columns.iter().map(Column::label).collect()
    }
}

/// Card part of a composite row id
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CardKey {
    /// Board sequence number of the card
    Number(u64),
    /// Short link, used when the card carries no sequence number
    ShortLink(ShortLink),
}

/// Composite row id: card key plus zero-based assignee index
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RowId {
    card: CardKey,
    index: usize,
}

impl RowId {
    /// Create a row id
    pub fn new(card: CardKey, index: usize) -> Self {
        Self { card, index }
    }

    /// Card part of the id
    pub fn card(&self) -> &CardKey {
        &self.card
    }

    /// Numeric prefix used for board ordering
    ///
    /// Rows keyed by short link sort after every numbered row.
    pub fn sort_key(&self) -> u64 {
        match &self.card {
            CardKey::Number(n) => *n,
            CardKey::ShortLink(_) => u64::MAX,
        }
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.card {
            CardKey::Number(n) => write!(f, "{n}-{}", self.index),
            CardKey::ShortLink(link) => write!(f, "{link}-{}", self.index),
        }
    }
}

/// One exported line
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub id: RowId,
    pub author: String,
    pub created: String,
    pub summary: String,
    pub description: String,
    pub state: String,
    pub sprint: String,
    pub story_points: String,
    pub assignee: String,
    pub due_date: String,
}

impl Row {
    /// Value of a single column
    pub fn field(&self, column: Column) -> String {
        match column {
            Column::Id => self.id.to_string(),
            Column::Author => self.author.clone(),
            Column::Created => self.created.clone(),
            Column::Summary => self.summary.clone(),
            Column::Description => self.description.clone(),
            Column::State => self.state.clone(),
            Column::Sprint => self.sprint.clone(),
            Column::StoryPoints => self.story_points.clone(),
            Column::Assignee => self.assignee.clone(),
            Column::DueDate => self.due_date.clone(),
        }
    }

    /// Values in column order
    pub fn record(&self, columns: &[Column]) -> Vec<String> {
        columns.iter().map(|c| self.field(*c)).collect()
    }
}
