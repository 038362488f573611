//! YouTrack REST client
//!
//! Destination-side contract: read issues and set story points. Creating
//! issues is left to the YouTrack CSV importer fed by the board export.

use super::models::{Issue, StoryPointsUpdate};
use crate::config::{SecretString, YouTrackConfig};
use crate::domain::{MigrationError, Result, YouTrackError};
use reqwest::{Client, ClientBuilder, RequestBuilder, StatusCode};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// YouTrack API client authenticated with a permanent token
pub struct YouTrackClient {
    base_url: String,
    client: Client,
    perm_token: SecretString,
}

impl YouTrackClient {
    /// Create a client from configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the HTTP client cannot be built.
    pub fn new(config: &YouTrackConfig) -> Result<Self> {
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                MigrationError::Configuration(format!("Failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
            perm_token: config.perm_token.clone(),
        })
    }

    /// Base URL of the YouTrack REST API
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        let token: &str = self.perm_token.expose_secret().as_ref();
        request
            .bearer_auth(token)
            .header("Accept", "application/json")
    }

    async fn send(&self, request: RequestBuilder, what: &str) -> Result<reqwest::Response> {
        let response = self.authorized(request).send().await.map_err(|e| {
            if e.is_timeout() {
                YouTrackError::Timeout(format!("{what}: {e}"))
            } else {
                YouTrackError::ConnectionFailed(format!("{what}: {e}"))
            }
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response.text().await.unwrap_or_default();
        let err = match status {
            StatusCode::NOT_FOUND => YouTrackError::IssueNotFound(format!("{what}: {message}")),
            s if s.is_server_error() => YouTrackError::ServerError {
                status: s.as_u16(),
                message,
            },
            s => YouTrackError::ClientError {
                status: s.as_u16(),
                message,
            },
        };
        Err(err.into())
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response, what: &str) -> Result<T> {
        response
            .json::<T>()
            .await
            .map_err(|e| YouTrackError::InvalidResponse(format!("{what}: {e}")).into())
    }

    /// Get one issue with the given field set
    pub async fn get_issue(&self, issue_id: &str, fields: &str) -> Result<Issue> {
        let url = format!("{}/issues/{}", self.base_url, issue_id);
        let what = format!("issue {issue_id}");
        let response = self
            .send(self.client.get(&url).query(&[("fields", fields)]), &what)
            .await?;
        Self::decode(response, &what).await
    }

    /// List up to `top` issues with the given field set
    pub async fn list_issues(&self, top: usize, fields: &str) -> Result<Vec<Issue>> {
        let url = format!("{}/issues", self.base_url);
        let top = top.to_string();
        let response = self
            .send(
                self.client
                    .get(&url)
                    .query(&[("$top", top.as_str()), ("fields", fields)]),
                "issue listing",
            )
            .await?;
        let issues: Vec<Issue> = Self::decode(response, "issue listing").await?;
        tracing::info!(count = issues.len(), "Fetched YouTrack issues");
        Ok(issues)
    }

    /// Set the story-point custom field of an issue
    pub async fn set_story_points(&self, update: &StoryPointsUpdate) -> Result<()> {
        let url = format!(
            "{}/issues/{}/customFields/{}",
            self.base_url, update.issue_id, update.field_id
        );
        let what = format!("story points of {}", update.issue_id);
        self.send(
            self.client
                .post(&url)
                .query(&[("fields", "id,value")])
                .json(&update.body()),
            &what,
        )
        .await?;

        tracing::info!(
            issue_id = %update.issue_id,
            points = update.points,
            "Story points updated"
        );
        Ok(())
    }
}
