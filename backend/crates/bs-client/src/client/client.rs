use crate::{ClientError, ClientResult};

use bs_config::UpstreamConfig;
use bs_core::{Project, ProjectSource, Result as SearchResult, SearchError};

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client as ReqwestClient;
use serde::Deserialize;

const API_KEY_PARAM: &str = "apiKey";

/// Error body returned by Backlog on non-success responses
#[derive(Debug, Deserialize)]
struct BacklogErrorBody {
    #[serde(default)]
    errors: Vec<BacklogErrorEntry>,
}

#[derive(Debug, Deserialize)]
struct BacklogErrorEntry {
    message: String,
}

/// HTTP client for the upstream Backlog REST API
pub struct BacklogClient {
    pub base_url: String,
    api_key: String,
    client: ReqwestClient,
}

impl BacklogClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - API root (e.g., "https://example.backlog.jp/api/v2")
    /// * `api_key` - Sent as the `apiKey` query parameter on every request
    /// * `timeout` - Total time allowed for one request
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> ClientResult<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            client,
        })
    }

    /// Create a client from validated upstream settings
    pub fn from_config(config: &UpstreamConfig) -> ClientResult<Self> {
        Self::new(
            config.base_url(),
            config.api_key.as_deref().unwrap_or_default(),
            config.timeout(),
        )
    }

    /// GET /projects
    ///
    /// Fetch every project visible to the API key.
    pub async fn fetch_projects(&self) -> ClientResult<Vec<Project>> {
        let url = format!("{}/projects", self.base_url);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .query(&[(API_KEY_PARAM, self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ClientError::status(
                status.as_u16(),
                Self::status_message(status, &body),
            ));
        }

        let projects: Vec<Project> = serde_json::from_str(&body)?;
        debug!("Upstream returned {} projects", projects.len());

        Ok(projects)
    }

    /// Build a message for a non-success response, preferring the
    /// upstream's own error text when the body carries one.
    fn status_message(status: reqwest::StatusCode, body: &str) -> String {
        let detail = serde_json::from_str::<BacklogErrorBody>(body)
            .ok()
            .and_then(|parsed| parsed.errors.into_iter().next())
            .map(|entry| entry.message);

        match detail {
            Some(detail) => format!("Upstream returned HTTP {}: {}", status, detail),
            None => format!("Upstream returned HTTP {}", status),
        }
    }
}

#[async_trait]
impl ProjectSource for BacklogClient {
    async fn list_projects(&self) -> SearchResult<Vec<Project>> {
        self.fetch_projects().await.map_err(|e| {
            if e.is_timeout() {
                warn!("Upstream project list timed out: {}", e);
            } else {
                warn!("Upstream project list failed: {}", e);
            }
            SearchError::from(e)
        })
    }
}
