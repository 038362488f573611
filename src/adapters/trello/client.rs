//! Trello REST client
//!
//! Injects the key/token credentials into every request and maps transport
//! and HTTP failures onto [`TrelloError`].

use super::source::{CardSource, ResourceKind};
use crate::config::{SecretString, TrelloConfig};
use crate::domain::ids::ShortLink;
use crate::domain::{Card, MigrationError, Result, TrelloError};
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use secrecy::ExposeSecret;
use serde_json::Value;
use std::time::Duration;

/// Card fields requested from the board listing
const CARD_FIELDS: &str = "shortLink,idShort,name,desc,due";

/// Action type marking card creation
pub const CREATE_CARD_ACTION: &str = "createCard";

/// Trello API client
///
/// One `reqwest::Client` is reused for every request so the connection is
/// shared across a bulk fetch.
///
/// # Example
///
/// ```no_run
/// use trello2youtrack::adapters::trello::{CardSource, TrelloClient};
/// use trello2youtrack::config::resolve_config;
///
/// # async fn example() -> trello2youtrack::domain::Result<()> {
/// let config = resolve_config(None)?;
/// let client = TrelloClient::new(&config.trello)?;
/// let cards = client.board_cards("board-id").await?;
/// # Ok(())
/// # }
/// ```
pub struct TrelloClient {
    base_url: String,
    client: Client,
    api_key: SecretString,
    api_token: SecretString,
    actions_limit: u32,
}

impl TrelloClient {
    /// Create a client from configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a credential is missing or the
    /// HTTP client cannot be built.
    pub fn new(config: &TrelloConfig) -> Result<Self> {
        let api_key = config.api_key.clone().ok_or_else(|| {
            MigrationError::Configuration("trello.api_key is required (TRELLO_API_KEY)".into())
        })?;
        let api_token = config.api_token.clone().ok_or_else(|| {
            MigrationError::Configuration("trello.api_token is required (TRELLO_API_TOKEN)".into())
        })?;

        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                MigrationError::Configuration(format!("Failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
            api_key,
            api_token,
            actions_limit: config.actions_limit,
        })
    }

    fn auth_params(&self) -> [(&str, &str); 2] {
        [
            ("key", self.api_key.expose_secret().as_ref()),
            ("token", self.api_token.expose_secret().as_ref()),
        ]
    }

    /// GET a path relative to the base URL and decode the JSON body
    async fn get_json(&self, path: &str, query: &[(&str, String)]) -> Result<Value> {
        let url = format!("{}/{}", self.base_url, path);

        tracing::debug!(url = %url, "Trello request");

        let response = self
            .client
            .get(&url)
            .query(&self.auth_params())
            .query(query)
            .send()
            .await
            .map_err(|e| transport_error(path, e, TrelloError::ConnectionFailed))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            let message = format!("GET {path}: {message}");
            let err = if status.is_server_error() {
                TrelloError::ServerError {
                    status: status.as_u16(),
                    message,
                }
            } else {
                TrelloError::ClientError {
                    status: status.as_u16(),
                    message,
                }
            };
            return Err(err.into());
        }

        let body = response
            .json::<Value>()
            .await
            .map_err(|e| transport_error(path, e, TrelloError::InvalidResponse))?;

        Ok(body)
    }

    fn resource_query(&self, kind: ResourceKind) -> Vec<(&'static str, String)> {
        match kind {
            ResourceKind::Actions => vec![
                ("filter", CREATE_CARD_ACTION.to_string()),
                ("limit", self.actions_limit.to_string()),
            ],
            _ => Vec::new(),
        }
    }
}

/// Map a reqwest failure, dropping the request URL
///
/// The URL carries the key and token as query parameters and must never
/// reach an error message.
fn transport_error(
    path: &str,
    err: reqwest::Error,
    otherwise: fn(String) -> TrelloError,
) -> TrelloError {
    let timed_out = err.is_timeout();
    let message = format!("{path}: {}", err.without_url());
    if timed_out {
        TrelloError::Timeout(message)
    } else {
        otherwise(message)
    }
}

#[async_trait]
impl CardSource for TrelloClient {
    async fn board_cards(&self, board_id: &str) -> Result<Vec<Card>> {
        let body = self
            .get_json(
                &format!("boards/{board_id}/cards"),
                &[("fields", CARD_FIELDS.to_string())],
            )
            .await?;

        let cards: Vec<Card> = serde_json::from_value(body).map_err(|e| {
            TrelloError::InvalidResponse(format!("Unexpected board card listing: {e}"))
        })?;

        tracing::info!(board_id = %board_id, count = cards.len(), "Fetched board cards");
        Ok(cards)
    }

    async fn card_resource(&self, card: &ShortLink, kind: ResourceKind) -> Result<Value> {
        let path = format!("cards/{}/{}", card, kind.path_segment());
        self.get_json(&path, &self.resource_query(kind)).await
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}
