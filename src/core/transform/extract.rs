//! Field extractors
//!
//! One pure function per export column. Extractors never fail: a missing
//! key, a wrong type or an absent element yields an empty value flagged as
//! not ok, and the offending payload is logged.

use crate::adapters::trello::CREATE_CARD_ACTION;
use crate::domain::{Card, CardKey, Column, RowId, ShortLink, UserMapping};
use crate::log_extraction_failure;
use serde_json::Value;

/// Extracted value with its outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extracted<T> {
    pub value: T,
    pub ok: bool,
}

impl<T> Extracted<T> {
    /// Successful extraction
    pub fn ok(value: T) -> Self {
        Self { value, ok: true }
    }

    /// Masked failure carrying the fallback value
    pub fn failed(value: T) -> Self {
        Self { value, ok: false }
    }
}

/// Apply `extract` to `payload`, falling back to `T::default()` on `None`
///
/// The failure is logged against `column` and `card` together with the
/// payload that could not be read.
pub fn extract_or_default<T, F>(
    column: Column,
    card: &ShortLink,
    payload: &Value,
    extract: F,
) -> Extracted<T>
where
    T: Default,
    F: FnOnce(&Value) -> Option<T>,
{
    match extract(payload) {
        Some(value) => Extracted::ok(value),
        None => {
            log_extraction_failure!(column.label(), card, payload);
            Extracted::failed(T::default())
        }
    }
}

/// Composite id of the `index`-th row emitted for `card`
///
/// Falls back to the short link when the card has no sequence number.
pub fn row_id(card: &Card, index: usize) -> Extracted<RowId> {
    match card.id_short.as_ref().and_then(Value::as_u64) {
        Some(number) => Extracted::ok(RowId::new(CardKey::Number(number), index)),
        None => {
            let payload = field_payload(card.id_short.as_ref());
            log_extraction_failure!(Column::Id.label(), card.short_link, payload);
            Extracted::failed(RowId::new(CardKey::ShortLink(card.short_link.clone()), index))
        }
    }
}

/// Translated creator and creation timestamp
///
/// Scans the card's actions for the creation action. Without one, both
/// fields are empty.
pub fn creator_and_created(
    card: &ShortLink,
    actions: &Value,
    users: &UserMapping,
) -> Extracted<(String, String)> {
    let creation = actions.as_array().and_then(|actions| {
        actions
            .iter()
            .find(|a| a.get("type").and_then(Value::as_str) == Some(CREATE_CARD_ACTION))
    });

    let Some(creation) = creation else {
        log_extraction_failure!(Column::Author.label(), card, actions);
        return Extracted::failed((String::new(), String::new()));
    };

    let created = creation
        .get("date")
        .and_then(Value::as_str)
        .map(str::to_string);
    let username = creation
        .get("memberCreator")
        .and_then(|m| m.get("username"))
        .and_then(Value::as_str);

    match (username, created) {
        (Some(username), Some(created)) => Extracted::ok((users.translate(username), created)),
        (username, created) => {
            log_extraction_failure!(Column::Author.label(), card, creation);
            Extracted::failed((
                username.map(|u| users.translate(u)).unwrap_or_default(),
                created.unwrap_or_default(),
            ))
        }
    }
}

/// Card title, verbatim
pub fn summary(card: &Card) -> Extracted<String> {
    text_field(card, Column::Summary, card.name.as_ref())
}

/// Card description, verbatim
pub fn description(card: &Card) -> Extracted<String> {
    text_field(card, Column::Description, card.desc.as_ref())
}

fn text_field(card: &Card, column: Column, value: Option<&Value>) -> Extracted<String> {
    match value.and_then(Value::as_str) {
        Some(text) => Extracted::ok(text.to_string()),
        None => {
            log_extraction_failure!(column.label(), card.short_link, field_payload(value));
            Extracted::failed(String::new())
        }
    }
}

/// Logged payload of a scalar card field
fn field_payload(value: Option<&Value>) -> String {
    value.map_or_else(|| "field missing".to_string(), Value::to_string)
}

/// Due timestamp, verbatim; an unset due date is an empty value
pub fn due(card: &Card) -> Extracted<String> {
    match &card.due {
        None => Extracted::ok(String::new()),
        Some(Value::String(due)) => Extracted::ok(due.clone()),
        Some(other) => {
            log_extraction_failure!(Column::DueDate.label(), card.short_link, other);
            Extracted::failed(String::new())
        }
    }
}

/// Member usernames in listing order
///
/// Members without a username are dropped and the extraction is flagged.
pub fn assignees(card: &ShortLink, members: &Value) -> Extracted<Vec<String>> {
    let Some(members) = members.as_array() else {
        log_extraction_failure!(Column::Assignee.label(), card, members);
        return Extracted::failed(Vec::new());
    };

    let mut usernames = Vec::with_capacity(members.len());
    let mut ok = true;
    for member in members {
        match member.get("username").and_then(Value::as_str) {
            Some(username) => usernames.push(username.to_string()),
            None => {
                log_extraction_failure!(Column::Assignee.label(), card, member);
                ok = false;
            }
        }
    }

    Extracted { value: usernames, ok }
}

/// Story points from the plugin data entry of the story-points extension
///
/// Every entry is inspected; entries of other extensions are ignored and a
/// matching entry whose value does not parse is skipped. A card without a
/// matching entry simply has no points.
pub fn story_points(
    card: &ShortLink,
    plugin_data: &Value,
    plugin_id: Option<&str>,
) -> Extracted<String> {
    let Some(entries) = plugin_data.as_array() else {
        log_extraction_failure!(Column::StoryPoints.label(), card, plugin_data);
        return Extracted::failed(String::new());
    };
    let Some(plugin_id) = plugin_id else {
        return Extracted::ok(String::new());
    };

    let mut ok = true;
    for entry in entries {
        if entry.get("idPlugin").and_then(Value::as_str) != Some(plugin_id) {
            continue;
        }
        match entry_points(entry) {
            Some(points) => return Extracted::ok(points),
            None => {
                log_extraction_failure!(Column::StoryPoints.label(), card, entry);
                ok = false;
            }
        }
    }

    Extracted {
        value: String::new(),
        ok,
    }
}

/// The entry's `value` is itself a JSON document holding `points`
fn entry_points(entry: &Value) -> Option<String> {
    let raw = entry.get("value")?.as_str()?;
    let value: Value = serde_json::from_str(raw).ok()?;
    match value.get("points")? {
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<f64>().ok().map(|_| s.to_string())
        }
        _ => None,
    }
}

/// Name of the list the card sits in, used as the sprint label
pub fn list_label(card: &ShortLink, list: &Value) -> Extracted<String> {
    extract_or_default(Column::Sprint, card, list, |list| {
        list.get("name").and_then(Value::as_str).map(str::to_string)
    })
}
