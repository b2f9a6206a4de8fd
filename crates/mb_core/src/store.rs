use async_trait::async_trait;

use crate::types::{BookmarkDraft, BookmarkRecord};
use crate::Result;

#[async_trait]
pub trait BookmarkStore: Send + Sync {
    /// Persist a bookmark draft
    async fn save(&self, draft: &BookmarkDraft) -> Result<()>;

    /// Fetch the full bookmark list
    async fn list(&self) -> Result<Vec<BookmarkRecord>>;

    /// Delete a bookmark by its store-assigned id
    async fn delete(&self, id: &str) -> Result<()>;
}
