//! Row expansion
//!
//! A card with N assignees becomes N rows that differ only in id suffix and
//! assignee. A card without assignees becomes a single row with suffix 0.

use super::extract::{self, Extracted};
use crate::adapters::trello::ResourceKind;
use crate::core::fetch::CardLookups;
use crate::domain::{Card, Row, UserMapping};
use serde_json::Value;

static MISSING: Value = Value::Null;

/// Settings shared by every row of one export
#[derive(Debug, Clone, Copy)]
pub struct RowContext<'a> {
    pub users: &'a UserMapping,
    pub resolved_state: &'a str,
    pub story_points_plugin_id: Option<&'a str>,
}

/// Rows of one card plus the number of masked extraction failures
#[derive(Debug, Clone, PartialEq)]
pub struct CardRows {
    pub rows: Vec<Row>,
    pub assignees: usize,
    pub extraction_failures: usize,
}

/// Rows of a whole board, in card order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardRows {
    pub rows: Vec<Row>,
    pub extraction_failures: usize,
    pub cards_without_assignees: usize,
}

#[derive(Default)]
struct FailureCount(usize);

impl FailureCount {
    fn take<T>(&mut self, extracted: Extracted<T>) -> T {
        if !extracted.ok {
            self.0 += 1;
        }
        extracted.value
    }
}

/// Expand one card into its export rows
pub fn expand_card(card: &Card, lookups: &CardLookups, ctx: &RowContext<'_>) -> CardRows {
    let link = &card.short_link;
    let lookup = |kind: ResourceKind| lookups.get(kind, link).unwrap_or(&MISSING);
    let mut failures = FailureCount::default();

    let (author, created) = failures.take(extract::creator_and_created(
        link,
        lookup(ResourceKind::Actions),
        ctx.users,
    ));
    let summary = failures.take(extract::summary(card));
    let description = failures.take(extract::description(card));
    let sprint = failures.take(extract::list_label(link, lookup(ResourceKind::List)));
    let story_points = failures.take(extract::story_points(
        link,
        lookup(ResourceKind::PluginData),
        ctx.story_points_plugin_id,
    ));
    let due_date = failures.take(extract::due(card));
    let members = failures.take(extract::assignees(link, lookup(ResourceKind::Members)));

    // a card without members still yields one row
    let slots: Vec<Option<&str>> = if members.is_empty() {
        vec![None]
    } else {
        members.iter().map(|m| Some(m.as_str())).collect()
    };

    let mut id_failed = false;
    let rows = slots
        .into_iter()
        .enumerate()
        .map(|(index, assignee)| {
            let id = extract::row_id(card, index);
            id_failed |= !id.ok;
            Row {
                id: id.value,
                author: author.clone(),
                created: created.clone(),
                summary: summary.clone(),
                description: description.clone(),
                state: ctx.resolved_state.to_string(),
                sprint: sprint.clone(),
                story_points: story_points.clone(),
                assignee: assignee.map(|a| ctx.users.translate(a)).unwrap_or_default(),
                due_date: due_date.clone(),
            }
        })
        .collect();

    CardRows {
        rows,
        assignees: members.len(),
        extraction_failures: failures.0 + usize::from(id_failed),
    }
}

/// Expand every card of the board, preserving card order
pub fn expand_board(cards: &[Card], lookups: &CardLookups, ctx: &RowContext<'_>) -> BoardRows {
    let mut board = BoardRows::default();
    for card in cards {
        let expanded = expand_card(card, lookups, ctx);
        if expanded.assignees == 0 {
            board.cards_without_assignees += 1;
        }
        board.extraction_failures += expanded.extraction_failures;
        board.rows.extend(expanded.rows);
    }
    board
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ShortLink;
    use serde_json::json;
    use std::collections::HashSet;

    const PLUGIN: &str = "points-plugin";

    fn users() -> UserMapping {
        [
            ("alice".to_string(), "a.smith".to_string()),
            ("carol".to_string(), "c.white".to_string()),
        ]
        .into_iter()
        .collect()
    }

    fn card(link: &str, number: u64) -> Card {
        Card::new(ShortLink::new(link).unwrap())
            .with_id_short(number)
            .with_name(format!("Card {number}"))
            .with_desc("Body")
    }

    fn lookups_for(card: &Card, members: Value) -> CardLookups {
        let link = card.short_link.clone();
        let mut lookups = CardLookups::default();
        lookups.insert(ResourceKind::List, link.clone(), json!({"name": "Sprint 2"}));
        lookups.insert(
            ResourceKind::Actions,
            link.clone(),
            json!([{
                "type": "createCard",
                "memberCreator": {"username": "alice"},
                "date": "2020-01-01T00:00:00Z"
            }]),
        );
        lookups.insert(ResourceKind::Members, link.clone(), members);
        lookups.insert(
            ResourceKind::PluginData,
            link,
            json!([{"idPlugin": PLUGIN, "value": "{\"points\":5}"}]),
        );
        lookups
    }

    fn ctx(users: &UserMapping) -> RowContext<'_> {
        RowContext {
            users,
            resolved_state: "Done",
            story_points_plugin_id: Some(PLUGIN),
        }
    }

    #[test]
    fn test_one_row_per_assignee() {
        let users = users();
        let card = card("a1", 12);
        let lookups = lookups_for(
            &card,
            json!([{"username": "carol"}, {"username": "bob"}, {"username": "alice"}]),
        );

        let expanded = expand_card(&card, &lookups, &ctx(&users));

        assert_eq!(expanded.extraction_failures, 0);
        assert_eq!(expanded.assignees, 3);
        assert_eq!(expanded.rows.len(), 3);
        let ids: Vec<String> = expanded.rows.iter().map(|r| r.id.to_string()).collect();
        assert_eq!(ids, vec!["12-0", "12-1", "12-2"]);
        let assignees: Vec<&str> = expanded.rows.iter().map(|r| r.assignee.as_str()).collect();
        // bob is unmapped
        assert_eq!(assignees, vec!["c.white", "", "a.smith"]);

        for row in &expanded.rows {
            assert_eq!(row.author, "a.smith");
            assert_eq!(row.created, "2020-01-01T00:00:00Z");
            assert_eq!(row.summary, "Card 12");
            assert_eq!(row.description, "Body");
            assert_eq!(row.state, "Done");
            assert_eq!(row.sprint, "Sprint 2");
            assert_eq!(row.story_points, "5");
            assert_eq!(row.due_date, "");
        }
    }

    #[test]
    fn test_card_without_assignees_yields_single_row() {
        let users = users();
        let card = card("a1", 3);
        let lookups = lookups_for(&card, json!([]));

        let expanded = expand_card(&card, &lookups, &ctx(&users));

        assert_eq!(expanded.rows.len(), 1);
        assert_eq!(expanded.rows[0].id.to_string(), "3-0");
        assert_eq!(expanded.rows[0].assignee, "");
    }

    #[test]
    fn test_missing_lookups_are_masked() {
        let users = users();
        let card = card("a1", 5);

        let expanded = expand_card(&card, &CardLookups::default(), &ctx(&users));

        assert_eq!(expanded.rows.len(), 1);
        let row = &expanded.rows[0];
        assert_eq!(row.author, "");
        assert_eq!(row.sprint, "");
        assert_eq!(row.story_points, "");
        assert_eq!(row.summary, "Card 5");
        // creator, list, plugin data and members
        assert_eq!(expanded.extraction_failures, 4);
    }

    #[test]
    fn test_resolved_state_is_constant() {
        let users = users();
        let card = card("a1", 1);
        let lookups = lookups_for(&card, json!([]));
        let context = RowContext {
            resolved_state: "Closed",
            ..ctx(&users)
        };

        let expanded = expand_card(&card, &lookups, &context);
        assert_eq!(expanded.rows[0].state, "Closed");
    }

    #[test]
    fn test_expand_board_ids_unique() {
        let users = users();
        let first = card("a1", 2);
        let second = card("b2", 1);
        let mut lookups = lookups_for(
            &first,
            json!([{"username": "alice"}, {"username": "carol"}]),
        );
        let other = lookups_for(&second, json!([]));
        for kind in ResourceKind::ALL {
            if let Some(payload) = other.get(kind, &second.short_link) {
                lookups.insert(kind, second.short_link.clone(), payload.clone());
            }
        }

        let board = expand_board(&[first, second], &lookups, &ctx(&users));

        assert_eq!(board.rows.len(), 3);
        assert_eq!(board.cards_without_assignees, 1);
        assert_eq!(board.extraction_failures, 0);
        let ids: HashSet<String> = board.rows.iter().map(|r| r.id.to_string()).collect();
        assert_eq!(ids.len(), board.rows.len());
    }
}
