//! Core migration logic.
//!
//! # Modules
//!
//! - [`fetch`] - Bulk retrieval of card sub-resources
//! - [`transform`] - Field extraction and per-assignee row expansion
//! - [`export`] - Board ordering, export coordination and summary
//!
//! # Export Workflow
//!
//! 1. **Load Users**: Read the source → destination username table
//! 2. **List Cards**: Fetch every card of the board
//! 3. **Bulk Fetch**: One pass per sub-resource kind (list, actions, members, plugin data)
//! 4. **Transform**: Extract fields and expand one row per assignee
//! 5. **Sort**: Stable order by card number
//! 6. **Write**: Atomically replace the export file
//! 7. **Report**: Log the export summary
//!
//! # Example
//!
//! ```rust,no_run
//! use trello2youtrack::config::resolve_config;
//! use trello2youtrack::core::export::ExportCoordinator;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = resolve_config(None)?;
//! let coordinator = ExportCoordinator::new(config)?;
//!
//! let summary = coordinator.execute_export().await?;
//!
//! println!("Cards: {}", summary.cards);
//! println!("Rows: {}", summary.rows);
//! # Ok(())
//! # }
//! ```

pub mod export;
pub mod fetch;
pub mod transform;
