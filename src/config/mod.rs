//! Configuration management.
//!
//! Settings come from built-in defaults, an optional TOML file and the
//! environment, in increasing order of precedence. A missing credential or
//! board id is a fatal configuration error raised before any network call.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use trello2youtrack::config::resolve_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = resolve_config(None)?;
//! config.validate()?;
//! println!("Trello API: {}", config.trello.base_url);
//! println!("Export file: {}", config.export.output_path);
//! # Ok(())
//! # }
//! ```
//!
//! # Example Configuration
//!
//! ```toml
//! [trello]
//! api_key = "${TRELLO_API_KEY}"
//! api_token = "${TRELLO_API_TOKEN}"
//! board_id = "${TRELLO_BOARD_ID}"
//! story_points_plugin_id = "${TRELLO_STORY_POINTS_PLUGIN_ID}"
//!
//! [youtrack]
//! base_url = "https://example.youtrack.cloud/api"
//! perm_token = "${YOUTRACK_PERM_TOKEN}"
//!
//! [export]
//! users_path = "assets/users.csv"
//! output_path = "assets/trello-board.csv"
//! resolved_state = "Done"
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Setting |
//! |---|---|
//! | `TRELLO_API_BASE_URL` | `trello.base_url` |
//! | `TRELLO_API_KEY` | `trello.api_key` |
//! | `TRELLO_API_TOKEN` | `trello.api_token` |
//! | `TRELLO_BOARD_ID` | `trello.board_id` |
//! | `TRELLO_STORY_POINTS_PLUGIN_ID` | `trello.story_points_plugin_id` |
//! | `YOUTRACK_API_BASE_URL` | `youtrack.base_url` |
//! | `YOUTRACK_PERM_TOKEN` | `youtrack.perm_token` |
//! | `T2Y_LOG_LEVEL` | `application.log_level` |
//! | `T2Y_USERS_PATH` | `export.users_path` |
//! | `T2Y_EXPORT_PATH` | `export.output_path` |
//! | `T2Y_RESOLVED_STATE` | `export.resolved_state` |
//! | `T2Y_TRELLO_TIMEOUT_SECONDS` | `trello.timeout_seconds` |
//! | `T2Y_TRELLO_PROGRESS_INTERVAL` | `trello.progress_interval` |
//! | `T2Y_LOGGING_LOCAL_ENABLED` | `logging.local_enabled` |
//! | `T2Y_LOGGING_LOCAL_PATH` | `logging.local_path` |

pub mod loader;
pub mod schema;
pub mod secret;

pub use loader::{load_config, load_from_env, resolve_config, DEFAULT_CONFIG_PATH};
pub use schema::{
    ApplicationConfig, ExportConfig, LoggingConfig, MigrationConfig, TrelloConfig,
    YouTrackConfig,
};
pub use secret::{secret_string, SecretString, SecretValue};
