//! Trello adapter implementation
//!
//! Source-side integration: the [`CardSource`] abstraction and its REST
//! implementation.

pub mod client;
pub mod source;

pub use client::{TrelloClient, CREATE_CARD_ACTION};
pub use source::{CardSource, ResourceKind};
