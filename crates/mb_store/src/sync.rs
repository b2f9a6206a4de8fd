use std::sync::Arc;
use tracing::{info, warn};

use mb_core::{BookmarkDraft, BookmarkRecord, BookmarkStore, FetchedContent, Result};

/// Keeps the visible bookmark list consistent with the remote store. The
/// store is the single source of truth: every confirmed mutation is
/// followed by a full list reload, and the held list is replaced wholesale.
/// No diffing, no identity tracking across reloads.
pub struct BookmarkSync {
    store: Arc<dyn BookmarkStore>,
    records: Vec<BookmarkRecord>,
}

impl BookmarkSync {
    pub fn new(store: Arc<dyn BookmarkStore>) -> Self {
        Self {
            store,
            records: Vec::new(),
        }
    }

    /// The bookmark list as of the last successful reload.
    pub fn records(&self) -> &[BookmarkRecord] {
        &self.records
    }

    /// Persist the displayed content, then reload the list. A store failure
    /// propagates and leaves the held list untouched; a reload failure
    /// after a confirmed save is logged, not surfaced — the save stands.
    pub async fn save(&mut self, content: &FetchedContent) -> Result<()> {
        let draft = BookmarkDraft::from_content(content);
        self.store.save(&draft).await?;
        if let Err(e) = self.reload().await {
            warn!("Failed to reload bookmarks after save: {}", e);
        }
        Ok(())
    }

    /// Delete by id, then reload the list.
    pub async fn delete(&mut self, id: &str) -> Result<()> {
        self.store.delete(id).await?;
        info!("🗑️ Bookmark {} deleted", id);
        if let Err(e) = self.reload().await {
            warn!("Failed to reload bookmarks after delete: {}", e);
        }
        Ok(())
    }

    /// Full replace from the store. On failure the previously held list
    /// stays as it was.
    pub async fn reload(&mut self) -> Result<()> {
        let records = self.store.list().await?;
        info!("📚 Loaded {} bookmarks", records.len());
        self.records = records;
        Ok(())
    }
}
