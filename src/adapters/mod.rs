//! External system integrations.
//!
//! This module provides adapters for the systems a migration touches:
//!
//! - [`trello`] - source board (cards and their sub-resources)
//! - [`youtrack`] - destination issue tracker
//! - [`csv`] - user mapping input and board export output
//!
//! # Design Pattern
//!
//! Adapters isolate external dependencies so the core pipeline can be
//! tested against in-memory implementations. The source side is reached
//! through the [`trello::CardSource`] trait:
//!
//! ```rust,no_run
//! use trello2youtrack::adapters::trello::{CardSource, ResourceKind, TrelloClient};
//! use trello2youtrack::config::resolve_config;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = resolve_config(None)?;
//! let client = TrelloClient::new(&config.trello)?;
//!
//! let cards = client.board_cards("board-id").await?;
//! for card in &cards {
//!     let members = client.card_resource(&card.short_link, ResourceKind::Members).await?;
//!     println!("{}: {}", card.short_link, members);
//! }
//! # Ok(())
//! # }
//! ```

pub mod csv;
pub mod trello;
pub mod youtrack;
