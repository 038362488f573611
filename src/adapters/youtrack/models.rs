//! YouTrack API models
//!
//! Response shapes are decoded leniently: unknown attributes are ignored and
//! everything except the database id is optional.

use crate::domain::Row;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Field set requested when none is given
pub const DEFAULT_ISSUE_FIELDS: &str = "id,idReadable,summary,description,customFields(name,value)";

/// Issue as returned by `/issues`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    /// Database id
    pub id: String,

    /// Human-readable id (e.g. `PROJ-12`)
    #[serde(default)]
    pub id_readable: Option<String>,

    #[serde(default)]
    pub summary: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub custom_fields: Vec<CustomField>,
}

impl Issue {
    /// Look up a custom field by name
    pub fn custom_field(&self, name: &str) -> Option<&CustomField> {
        self.custom_fields
            .iter()
            .find(|f| f.name.as_deref() == Some(name))
    }
}

/// Custom field value attached to an issue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomField {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub value: Value,

    #[serde(rename = "$type", default)]
    pub field_type: Option<String>,
}

/// Story-point update for one issue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryPointsUpdate {
    pub issue_id: String,
    pub field_id: String,
    pub points: i64,
}

impl StoryPointsUpdate {
    /// Build an update from an exported row
    ///
    /// Returns `None` when the row carries no whole-number story points.
    pub fn from_row(
        issue_id: impl Into<String>,
        field_id: impl Into<String>,
        row: &Row,
    ) -> Option<Self> {
        let points = parse_points(&row.story_points)?;
        Some(Self {
            issue_id: issue_id.into(),
            field_id: field_id.into(),
            points,
        })
    }

    /// Request body for the custom field endpoint
    pub fn body(&self) -> Value {
        json!({
            "value": self.points,
            "$type": "SimpleIssueCustomField",
        })
    }
}

fn parse_points(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(points) = raw.parse::<i64>() {
        return Some(points);
    }
    let value = raw.parse::<f64>().ok()?;
    if value.is_finite() && value.fract() == 0.0 {
        Some(value as i64)
    } else {
        None
    }
}
