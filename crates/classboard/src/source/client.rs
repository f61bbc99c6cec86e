//! HTTP client for the class API.
//!
//! Reads decode JSON bodies and fail on any non-success status. Writes report
//! the status back to the caller instead of failing, since the dashboard
//! reloads after every write no matter how it went.

use super::error::SourceError;
use super::DataSource;
use crate::config::Config;
use crate::types::{ClassSession, Classroom, DashboardStats, FormFields};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};
use url::Url;

/// Paths of the API resources, relative to the base URL.
const CLASSROOMS_PATH: &str = "/classrooms";
const CLASSES_PATH: &str = "/classes";
const STATS_PATH: &str = "/dashboard-stats";

/// Result of a write that reached the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteOutcome {
    pub status: u16,
}

impl WriteOutcome {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

impl From<StatusCode> for WriteOutcome {
    fn from(status: StatusCode) -> Self {
        Self {
            status: status.as_u16(),
        }
    }
}

/// Client for the remote class API.
pub struct ApiClient {
    client: Client,
    /// Base URL with any trailing '/' removed
    base_url: String,
}

impl ApiClient {
    /// Creates a client for `config.api_base_url`.
    pub fn with_config(config: &Config) -> Result<Self, SourceError> {
        // Validate early so a bad base URL fails at startup, not on first load
        Url::parse(&config.api_base_url)?;

        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.connect_timeout())
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| SourceError::Network {
                message: format!("Failed to build HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Creates a client for a base URL with otherwise default settings.
    pub fn new(base_url: &str) -> Result<Self, SourceError> {
        let config = Config {
            api_base_url: base_url.to_string(),
            ..Config::default()
        };
        Self::with_config(&config)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GETs `path` and decodes the body as `T`.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, SourceError> {
        let url = self.url(path);
        debug!(url = %url, "GET");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::UnexpectedResponse {
                resource: path.to_string(),
                message: format!("status {}", status),
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| SourceError::decode(path, e))
    }

    /// POSTs the form fields as a flat JSON object.
    async fn post_fields(&self, path: &str, fields: &FormFields) -> Result<WriteOutcome, SourceError> {
        let url = self.url(path);
        info!(url = %url, fields = fields.len(), "POST");

        let response = self.client.post(&url).json(fields).send().await?;
        let outcome = WriteOutcome::from(response.status());
        if !outcome.is_success() {
            let detail = response.text().await.unwrap_or_default();
            warn!(url = %url, status = outcome.status, detail = %detail, "Write was rejected");
        }
        Ok(outcome)
    }
}

#[async_trait]
impl DataSource for ApiClient {
    async fn classrooms(&self) -> Result<Vec<Classroom>, SourceError> {
        self.get_json(CLASSROOMS_PATH).await
    }

    async fn classes(&self) -> Result<Vec<ClassSession>, SourceError> {
        self.get_json(CLASSES_PATH).await
    }

    async fn stats(&self) -> Result<DashboardStats, SourceError> {
        self.get_json(STATS_PATH).await
    }

    async fn create_classroom(&self, fields: &FormFields) -> Result<WriteOutcome, SourceError> {
        self.post_fields(CLASSROOMS_PATH, fields).await
    }

    async fn create_class(&self, fields: &FormFields) -> Result<WriteOutcome, SourceError> {
        self.post_fields(CLASSES_PATH, fields).await
    }

    async fn delete_class(&self, id: i64) -> Result<WriteOutcome, SourceError> {
        let url = self.url(&format!("{}/{}", CLASSES_PATH, id));
        info!(url = %url, id = id, "DELETE");

        let response = self.client.delete(&url).send().await?;
        let outcome = WriteOutcome::from(response.status());
        if !outcome.is_success() {
            warn!(url = %url, status = outcome.status, "Delete was rejected");
        }
        Ok(outcome)
    }
}
