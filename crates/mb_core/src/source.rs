use async_trait::async_trait;

use crate::types::FetchedContent;
use crate::Result;

#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Fetch parsed content for a URL, normalized into the display model
    async fn fetch(&self, url: &str) -> Result<FetchedContent>;
}
