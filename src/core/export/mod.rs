//! Export orchestration
//!
//! This module provides the board export, including:
//! - Board ordering by card number
//! - Export coordination and orchestration
//! - Summary and reporting

pub mod board;
pub mod coordinator;
pub mod summary;

pub use board::sort_board;
pub use coordinator::ExportCoordinator;
pub use summary::ExportSummary;
