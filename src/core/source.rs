use crate::domain::ports::PageSource;
use crate::utils::error::Result;
use reqwest::Client;
use std::path::PathBuf;

/// Fetches the venue listing page over HTTP.
#[derive(Debug, Clone)]
pub struct HttpPage {
    url: String,
    client: Client,
}

impl HttpPage {
    pub fn new(base_url: &str, listing_path: &str) -> Self {
        Self {
            url: format!("{}{}", base_url.trim_end_matches('/'), listing_path),
            client: Client::new(),
        }
    }
}

impl PageSource for HttpPage {
    async fn fetch(&self) -> Result<String> {
        tracing::debug!("GET {}", self.url);
        let response = self.client.get(&self.url).send().await?;
        tracing::debug!("Listing response status: {}", response.status());
        Ok(response.text().await?)
    }
}

/// Reads a saved copy of the listing from disk.
#[derive(Debug, Clone)]
pub struct FilePage {
    path: PathBuf,
}

impl FilePage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PageSource for FilePage {
    async fn fetch(&self) -> Result<String> {
        tracing::debug!("Reading listing from {}", self.path.display());
        let html = tokio::fs::read_to_string(&self.path).await?;
        Ok(html)
    }
}
