//! Board ordering

use crate::domain::Row;

/// Order rows by card sequence number
///
/// The sort is stable, so rows of one card keep their assignee order and
/// cards without a sequence number keep listing order at the end.
pub fn sort_board(rows: &mut [Row]) {
    rows.sort_by_key(|row| row.id.sort_key());
}
