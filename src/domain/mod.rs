//! Domain models and types.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Identifiers** ([`ShortLink`]) keying every per-card lookup table
//! - **Source model** ([`Card`])
//! - **Export model** ([`Row`], [`RowId`], [`Column`])
//! - **Identity translation** ([`UserMapping`])
//! - **Error types** ([`MigrationError`], [`TrelloError`], [`YouTrackError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, MigrationError>`]:
//!
//! ```rust
//! use trello2youtrack::domain::{MigrationError, Result};
//!
//! fn example() -> Result<()> {
//!     let config = trello2youtrack::config::load_config("trello2youtrack.toml")?;
//!     Ok(())
//! }
//! ```

pub mod card;
pub mod errors;
pub mod ids;
pub mod result;
pub mod row;
pub mod user_mapping;

pub use card::Card;
pub use errors::{MigrationError, TrelloError, YouTrackError};
pub use ids::ShortLink;
pub use result::Result;
pub use row::{CardKey, Column, Row, RowId};
pub use user_mapping::UserMapping;
