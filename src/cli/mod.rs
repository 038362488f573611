//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for trello2youtrack using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Trello2YouTrack - Trello to YouTrack migration tool
#[derive(Parser, Debug)]
#[command(name = "trello2youtrack")]
#[command(version, about, long_about = None)]
#[command(author = "Trello2YouTrack Contributors")]
pub struct Cli {
    /// Path to configuration file (defaults to trello2youtrack.toml when present)
    #[arg(short, long, env = "T2Y_CONFIG")]
    pub config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "T2Y_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export board cards to a YouTrack import CSV
    Export(commands::export::ExportArgs),

    /// Validate configuration
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),

    /// List issues from the destination YouTrack instance
    ListIssues(commands::list_issues::ListIssuesArgs),
}

impl Commands {
    /// Command name, used to name the run's log file
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Export(_) => "export",
            Commands::ValidateConfig(_) => "validate-config",
            Commands::Init(_) => "init",
            Commands::ListIssues(_) => "list-issues",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_export() {
        let cli = Cli::parse_from(["trello2youtrack", "export"]);
        assert!(cli.config.is_none());
        assert!(matches!(cli.command, Commands::Export(_)));
        assert_eq!(cli.command.name(), "export");
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["trello2youtrack", "--config", "custom.toml", "export"]);
        assert_eq!(cli.config.as_deref(), Some("custom.toml"));
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["trello2youtrack", "--log-level", "debug", "export"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_export_overrides() {
        let cli = Cli::parse_from([
            "trello2youtrack",
            "export",
            "--board-id",
            "b1",
            "--output",
            "out.csv",
            "--users",
            "users.csv",
        ]);
        match cli.command {
            Commands::Export(args) => {
                assert_eq!(args.board_id.as_deref(), Some("b1"));
                assert_eq!(args.output.as_deref(), Some("out.csv"));
                assert_eq!(args.users.as_deref(), Some("users.csv"));
            }
            other => panic!("Expected export, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["trello2youtrack", "validate-config"]);
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["trello2youtrack", "init"]);
        assert!(matches!(cli.command, Commands::Init(_)));
    }

    #[test]
    fn test_cli_parse_list_issues() {
        let cli = Cli::parse_from(["trello2youtrack", "list-issues", "--top", "5"]);
        match cli.command {
            Commands::ListIssues(args) => assert_eq!(args.top, 5),
            other => panic!("Expected list-issues, got {other:?}"),
        }
    }
}
