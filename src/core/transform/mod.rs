//! Card to row transformation
//!
//! - [`extract`] - one fail-soft extractor per export column
//! - [`rows`] - per-assignee row expansion
//!
//! Extraction never aborts a run. Every masked failure is logged with its
//! payload and counted so the export summary reports how many cells were
//! defaulted.

pub mod extract;
pub mod rows;

pub use extract::{extract_or_default, Extracted};
pub use rows::{expand_board, expand_card, BoardRows, CardRows, RowContext};
