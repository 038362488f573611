// Trello2YouTrack - Trello to YouTrack migration tool
// Copyright (c) 2025 Trello2YouTrack Contributors
// Licensed under the MIT License

//! # Trello2YouTrack - Trello to YouTrack migration
//!
//! Trello2YouTrack flattens the cards of a Trello board, together with their
//! creation action, members, power-up data and list, into the delimited
//! table consumed by the YouTrack CSV importer.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Extracting** cards and their sub-resources from the Trello REST API
//! - **Transforming** each card into one row per assignee with translated usernames
//! - **Loading** the ordered rows into an import CSV, replaced atomically
//! - **Reaching** the destination YouTrack REST API (issue reads, story points)
//!
//! ## Architecture
//!
//! Trello2YouTrack follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (bulk fetch, transform, export)
//! - [`adapters`] - External integrations (Trello, YouTrack, CSV files)
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use trello2youtrack::config::resolve_config;
//! use trello2youtrack::core::export::ExportCoordinator;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = resolve_config(None)?;
//!
//!     let coordinator = ExportCoordinator::new(config)?;
//!     let summary = coordinator.execute_export().await?;
//!
//!     println!("Exported {} rows for {} cards", summary.rows, summary.cards);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Two policies coexist. Fetch and configuration failures are fatal and
//! surface as [`domain::MigrationError`]. Field extraction failures are
//! masked with an empty value, logged with their payload and counted in the
//! [`core::export::ExportSummary`].
//!
//! ```rust,no_run
//! use trello2youtrack::domain::MigrationError;
//!
//! fn example() -> Result<(), MigrationError> {
//!     let config = trello2youtrack::config::load_config("trello2youtrack.toml")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Logging
//!
//! Structured logging uses the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn};
//!
//! info!(board_id = "abc123", "Starting export");
//! warn!(username = "bob", "No destination user mapped");
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
