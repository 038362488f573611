// Trello2YouTrack - Trello to YouTrack migration tool
// Copyright (c) 2025 Trello2YouTrack Contributors
// Licensed under the MIT License

use clap::Parser;
use std::process;
use trello2youtrack::cli::{Cli, Commands};
use trello2youtrack::config::{resolve_config, LoggingConfig, MigrationConfig};
use trello2youtrack::logging::{init_logging, run_logging_settings};

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // init runs before any configuration exists
    if let Commands::Init(args) = &cli.command {
        let log_level = cli.log_level.as_deref().unwrap_or("info");
        let _guard = match init_logging(log_level, &console_only(), cli.command.name()) {
            Ok(guard) => guard,
            Err(e) => {
                eprintln!("Failed to initialize logging: {e}");
                process::exit(5);
            }
        };
        process::exit(finish(args.execute().await));
    }

    let loaded = resolve_config(cli.config.as_deref());

    let (logging_config, config_level) = run_logging_settings(&loaded);
    let log_level = cli.log_level.clone().unwrap_or(config_level);
    let initialized = init_logging(&log_level, &logging_config, cli.command.name());
    // an unusable default log directory must not hide the configuration error
    let initialized = match initialized {
        Err(_) if loaded.is_err() => init_logging(&log_level, &console_only(), cli.command.name()),
        other => other,
    };
    let guard = match initialized {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(5);
        }
    };

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        command = cli.command.name(),
        log_file = ?guard.log_file(),
        "Trello2YouTrack - Trello to YouTrack migration tool"
    );

    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load configuration");
            eprintln!("❌ Failed to load configuration");
            eprintln!("   Error: {e}");
            drop(guard);
            process::exit(2); // Configuration error exit code
        }
    };

    let exit_code = finish(execute_command(&cli, config).await);

    // flush the file writer before exiting
    drop(guard);
    process::exit(exit_code);
}

fn console_only() -> LoggingConfig {
    LoggingConfig {
        local_enabled: false,
        ..LoggingConfig::default()
    }
}

/// Execute the CLI command
async fn execute_command(cli: &Cli, config: MigrationConfig) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Export(args) => args.execute(config).await,
        Commands::ValidateConfig(args) => args.execute(&config).await,
        Commands::ListIssues(args) => args.execute(&config).await,
        Commands::Init(args) => args.execute().await,
    }
}

fn finish(result: anyhow::Result<i32>) -> i32 {
    match result {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            5 // Fatal error exit code
        }
    }
}
