//! Downloads a remote resume into a per-request temp file.
//!
//! The returned `NamedTempFile` deletes itself on drop, so every exit path
//! of the caller cleans up after itself.

use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{debug, error};
use uuid::Uuid;

/// Network timeout for the whole download.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected status {0}")]
    Status(StatusCode),

    #[error("Temp file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Resume URL is not a string: {0}")]
    InvalidUrl(String),
}

/// Fetches a resume PDF into local storage.
///
/// Carried in `AppState` as `Arc<dyn ResumeFetcher>`.
#[async_trait]
pub trait ResumeFetcher: Send + Sync {
    async fn fetch(&self, url: &str, request_id: Uuid) -> Result<NamedTempFile, FetchError>;
}

/// Downloads over HTTP(S) with a fixed 30-second timeout.
#[derive(Clone)]
pub struct HttpResumeFetcher {
    client: Client,
}

impl HttpResumeFetcher {
    pub fn new() -> anyhow::Result<Self> {
        Self::with_timeout(FETCH_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client })
    }

    async fn download(&self, url: &str, request_id: Uuid) -> Result<NamedTempFile, FetchError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }
        let body = response.bytes().await?;

        let file = tempfile::Builder::new()
            .prefix(&format!("resume-{request_id}-"))
            .suffix(".pdf")
            .tempfile()?;
        tokio::fs::write(file.path(), &body).await?;

        debug!(
            "Downloaded {} bytes to {}",
            body.len(),
            file.path().display()
        );
        Ok(file)
    }
}

#[async_trait]
impl ResumeFetcher for HttpResumeFetcher {
    async fn fetch(&self, url: &str, request_id: Uuid) -> Result<NamedTempFile, FetchError> {
        self.download(url, request_id).await.map_err(|e| {
            error!(%request_id, "Error downloading PDF: {e}");
            e
        })
    }
}
