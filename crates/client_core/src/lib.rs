//! Client for the random user API plus the directory view state and its
//! renderers.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use shared::domain::{EmployeeRecord, RandomUserResponse};
use thiserror::Error;
use tracing::{debug, error, info};

pub mod settings;
pub mod state;
pub mod text;
pub mod view;

pub use settings::{load_settings, Settings};
pub use state::{DirectoryEvent, DirectoryState, LoadStatus, Mode};

pub const DEFAULT_API_URL: &str = "https://randomuser.me/api";
pub const DEFAULT_RESULT_COUNT: usize = 12;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to build http client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} answered with status {status}")]
    Status { url: String, status: StatusCode },
    #[error("malformed response body from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Source of employee profiles and their portraits.
#[async_trait]
pub trait EmployeeSource: Send + Sync {
    async fn fetch_employees(&self, count: usize) -> Result<Vec<EmployeeRecord>, FetchError>;
    async fn fetch_portrait(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

#[derive(Debug, Clone)]
pub struct DirectoryClient {
    http: Client,
    api_url: String,
}

impl DirectoryClient {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            api_url: api_url.into(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, FetchError> {
        let http = Client::builder()
            .timeout(settings.request_timeout())
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self {
            http,
            api_url: settings.api_url.clone(),
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn results_url(&self) -> String {
        format!("{}/", self.api_url.trim_end_matches('/'))
    }

    async fn get_bytes(&self, url: &str, query: &[(&str, String)]) -> Result<Vec<u8>, FetchError> {
        let res = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = res.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = res.bytes().await.map_err(|source| FetchError::Transport {
            url: url.to_string(),
            source,
        })?;
        Ok(body.to_vec())
    }

    async fn request_employees(
        &self,
        url: &str,
        count: usize,
    ) -> Result<Vec<EmployeeRecord>, FetchError> {
        let body = self
            .get_bytes(url, &[("results", count.to_string())])
            .await?;
        let parsed: RandomUserResponse =
            serde_json::from_slice(&body).map_err(|source| FetchError::Decode {
                url: url.to_string(),
                source,
            })?;
        Ok(parsed.results)
    }
}

#[async_trait]
impl EmployeeSource for DirectoryClient {
    async fn fetch_employees(&self, count: usize) -> Result<Vec<EmployeeRecord>, FetchError> {
        let url = self.results_url();
        info!(%url, count, "fetching employees");

        let result = self.request_employees(&url, count).await;
        match &result {
            Ok(employees) => info!(received = employees.len(), "fetched employees"),
            Err(err) => error!(%url, status = ?err.status(), "employee fetch failed: {err}"),
        }
        result
    }

    async fn fetch_portrait(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        debug!(%url, "fetching portrait");
        self.get_bytes(url, &[]).await
    }
}

/// Runs the start-up fetch and folds its outcome into a fresh state.
pub async fn load_directory(source: &dyn EmployeeSource, count: usize) -> DirectoryState {
    let event = match source.fetch_employees(count).await {
        Ok(employees) => DirectoryEvent::Loaded(employees),
        Err(err) => DirectoryEvent::LoadFailed(err.to_string()),
    };
    DirectoryState::new().apply(event)
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
