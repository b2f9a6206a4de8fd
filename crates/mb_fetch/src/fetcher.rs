use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, info};
use url::Url;

use mb_core::wire;
use mb_core::{ContentSource, Error, FetchedContent, Result};

/// Fetches parsed page content through the backend's `/fetch` endpoint.
///
/// One POST per call, no retry, no client-side timeout; a failure is
/// reported once and needs a new user action to retry.
pub struct HttpFetcher {
    client: reqwest::Client,
    base_url: String,
}

impl HttpFetcher {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn validate(url: &str) -> Result<()> {
        if url.trim().is_empty() {
            return Err(Error::InvalidUrl("URL must not be empty".to_string()));
        }
        Url::parse(url).map_err(|e| Error::InvalidUrl(format!("{}: {}", url, e)))?;
        Ok(())
    }
}

#[async_trait]
impl ContentSource for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedContent> {
        // Rejected here, before any request goes out
        Self::validate(url)?;

        info!("📥 Fetching content for {}", url);
        let response = self
            .client
            .post(format!("{}/fetch", self.base_url))
            .json(&json!({ "url": url }))
            .send()
            .await?;
        debug!("Fetch response status: {}", response.status());

        // Read the body as text first so malformed payloads can be logged
        // verbatim before the generic error surfaces
        let body = response.text().await?;
        let raw = wire::parse_body(&body)?;
        let content = wire::normalize(raw, url)?;
        info!("✨ Fetched \"{}\" from {}", content.title, url);
        Ok(content)
    }
}
