//! Where content documents are retrieved from

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;

use crate::helpers::join_url;

/// Retrieves the raw body of a content document by its relative path
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Fetch the body at `path` (e.g. `data/hero.json`)
    async fn fetch(&self, path: &str) -> Result<String>;

    /// Human-readable location, for logs
    fn describe(&self) -> String;
}

/// Fetches documents with HTTP GET relative to a base URL
///
/// No query parameters, no extra headers and no authentication are sent.
/// The client has no timeout: a hung request only delays its own section.
pub struct HttpSource {
    base_url: String,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    pub fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.into(),
            client,
        }
    }
}

#[async_trait]
impl DocumentSource for HttpSource {
    async fn fetch(&self, path: &str) -> Result<String> {
        let url = join_url(&self.base_url, path);
        tracing::debug!("GET {}", url);

        let body = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("request to {} failed", url))?
            .error_for_status()?
            .text()
            .await?;

        Ok(body)
    }

    fn describe(&self) -> String {
        self.base_url.clone()
    }
}

/// Reads documents from a local directory
pub struct FsSource {
    root: PathBuf,
}

impl FsSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl DocumentSource for FsSource {
    async fn fetch(&self, path: &str) -> Result<String> {
        let full = self.root.join(path.trim_start_matches("./"));
        tracing::debug!("Reading {:?}", full);

        tokio::fs::read_to_string(&full)
            .await
            .with_context(|| format!("failed to read {:?}", full))
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}
