//! Sub-resource retrieval
//!
//! [`BulkFetcher`] walks the card list once per [`ResourceKind`](crate::adapters::trello::ResourceKind)
//! and [`CardLookups`] holds the four resulting tables for the transform step.

pub mod bulk;
pub mod lookups;

pub use bulk::BulkFetcher;
pub use lookups::CardLookups;
