//! Domain error types
//!
//! All errors are domain-specific and don't expose third-party types.
//! Field extraction failures are deliberately absent from this hierarchy:
//! they are masked with empty values (see [`crate::core::transform::extract`]).

use thiserror::Error;

/// Main error type
///
/// Any of these aborts the current run.
#[derive(Debug, Error)]
pub enum MigrationError {
    /// Configuration-related errors (raised before any network call)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Trello (source) API errors
    #[error("Trello error: {0}")]
    Trello(#[from] TrelloError),

    /// YouTrack (destination) API errors
    #[error("YouTrack error: {0}")]
    YouTrack(#[from] YouTrackError),

    /// Export process errors
    #[error("Export error: {0}")]
    Export(String),

    /// Delimited text read/write errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

/// Trello-specific errors
///
/// Every variant is fatal for a bulk fetch: there is no partial-success mode.
#[derive(Debug, Error)]
pub enum TrelloError {
    /// Failed to reach the Trello API
    #[error("Failed to connect to Trello: {0}")]
    ConnectionFailed(String),

    /// Request exceeded the configured timeout
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// Client error (4xx)
    #[error("Client error: {status} - {message}")]
    ClientError { status: u16, message: String },

    /// Server error (5xx)
    #[error("Server error: {status} - {message}")]
    ServerError { status: u16, message: String },

    /// Response body could not be decoded
    #[error("Invalid response from server: {0}")]
    InvalidResponse(String),
}

/// YouTrack-specific errors
#[derive(Debug, Error)]
pub enum YouTrackError {
    /// Failed to reach the YouTrack API
    #[error("Failed to connect to YouTrack: {0}")]
    ConnectionFailed(String),

    /// Request exceeded the configured timeout
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// Client error (4xx)
    #[error("Client error: {status} - {message}")]
    ClientError { status: u16, message: String },

    /// Server error (5xx)
    #[error("Server error: {status} - {message}")]
    ServerError { status: u16, message: String },

    /// Issue not found
    #[error("Issue not found: {0}")]
    IssueNotFound(String),

    /// Response body could not be decoded
    #[error("Invalid response from server: {0}")]
    InvalidResponse(String),
}

impl From<std::io::Error> for MigrationError {
    fn from(err: std::io::Error) -> Self {
        MigrationError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for MigrationError {
    fn from(err: serde_json::Error) -> Self {
        MigrationError::Serialization(err.to_string())
    }
}

impl From<csv::Error> for MigrationError {
    fn from(err: csv::Error) -> Self {
        MigrationError::Csv(err.to_string())
    }
}

impl From<toml::de::Error> for MigrationError {
    fn from(err: toml::de::Error) -> Self {
        MigrationError::Configuration(format!("TOML parse error: {err}"))
    }
}
