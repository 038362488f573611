//! YouTrack adapter implementation
//!
//! Destination-side integration. Rows leave the exporter already
//! identity-mapped and carrying numeric story points, so
//! [`StoryPointsUpdate::from_row`] needs no further transformation.

pub mod client;
pub mod models;

pub use client::YouTrackClient;
pub use models::{CustomField, Issue, StoryPointsUpdate, DEFAULT_ISSUE_FIELDS};
