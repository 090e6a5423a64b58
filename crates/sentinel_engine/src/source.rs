use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use sentinel_core::{ServerIdentity, Snapshot};
use serde::Deserialize;
use thiserror::Error;
use watch_logging::watch_debug;

use crate::store::snapshot_from_json;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransportError {
    #[error("invalid server url: {0}")]
    InvalidUrl(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out: {0}")]
    Timeout(String),
    #[error("server answered with http status {0}")]
    HttpStatus(u16),
    #[error("malformed job payload: {0}")]
    MalformedPayload(String),
    #[error("could not read {path:?}: {reason}")]
    Unreadable { path: PathBuf, reason: String },
}

#[derive(Debug, Clone)]
pub struct HttpSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    /// Minimum spacing applied before each request, as a courtesy toward the
    /// server. Not a precision timer.
    pub courtesy_delay: Duration,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            courtesy_delay: Duration::from_secs(1),
        }
    }
}

/// Producer of job snapshots; the network transport and the offline file
/// source are used interchangeably by the driver.
#[async_trait::async_trait]
pub trait JobSource: Send + Sync {
    async fn fetch(&self) -> Result<Snapshot, TransportError>;
}

#[derive(Debug, Deserialize)]
struct JobEntry {
    name: String,
    color: String,
}

#[derive(Debug, Deserialize)]
struct JobListing {
    jobs: Vec<JobEntry>,
}

/// Fetches the job list from `{server}/api/json/`.
#[derive(Debug, Clone)]
pub struct HttpJobSource {
    identity: ServerIdentity,
    settings: HttpSettings,
}

impl HttpJobSource {
    pub fn new(identity: ServerIdentity, settings: HttpSettings) -> Self {
        Self { identity, settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, TransportError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| TransportError::Network(err.to_string()))
    }
}

#[async_trait::async_trait]
impl JobSource for HttpJobSource {
    async fn fetch(&self) -> Result<Snapshot, TransportError> {
        let endpoint = format!("{}/api/json/", self.identity);
        let url = reqwest::Url::parse(&endpoint)
            .map_err(|err| TransportError::InvalidUrl(err.to_string()))?;
        let client = self.build_client()?;

        tokio::time::sleep(self.settings.courtesy_delay).await;
        watch_debug!("Requesting {url}");

        let response = client.get(url).send().await.map_err(map_reqwest_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::HttpStatus(status.as_u16()));
        }

        let body = response.text().await.map_err(map_reqwest_error)?;
        parse_job_listing(&body)
    }
}

/// Parses the server's `{"jobs": [{"name", "color"}, ...]}` payload into an
/// ordered snapshot.
pub(crate) fn parse_job_listing(body: &str) -> Result<Snapshot, TransportError> {
    let listing: JobListing =
        serde_json::from_str(body).map_err(|err| TransportError::MalformedPayload(err.to_string()))?;
    Ok(listing
        .jobs
        .into_iter()
        .map(|job| (job.name, job.color))
        .collect())
}

/// Reads a previously serialized snapshot from disk instead of the network.
#[derive(Debug, Clone)]
pub struct FileJobSource {
    path: PathBuf,
}

impl FileJobSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl JobSource for FileJobSource {
    async fn fetch(&self) -> Result<Snapshot, TransportError> {
        let text = fs::read_to_string(&self.path).map_err(|err| TransportError::Unreadable {
            path: self.path.clone(),
            reason: err.to_string(),
        })?;
        snapshot_from_json(&text).map_err(|err| TransportError::MalformedPayload(err.to_string()))
    }
}

fn map_reqwest_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        return TransportError::Timeout(err.to_string());
    }
    TransportError::Network(err.to_string())
}
