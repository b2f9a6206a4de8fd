use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use mb_core::{BookmarkDraft, BookmarkRecord, BookmarkStore, Error, Result};

/// In-process bookmark store: offline runs and tests. Mints uuid v4 ids
/// and keeps insertion order, like the remote store does.
#[derive(Default)]
pub struct MemoryStore {
    records: Vec<BookmarkRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn save(&mut self, draft: &BookmarkDraft) -> BookmarkRecord {
        let record = BookmarkRecord {
            id: Uuid::new_v4().to_string(),
            url: draft.url.clone(),
            title: draft.title.clone(),
            kind: draft.kind,
            summary: draft.summary.clone(),
            links: draft.links.clone(),
            saved_at: Some(Utc::now()),
        };
        self.records.push(record.clone());
        record
    }

    pub fn list(&self) -> Vec<BookmarkRecord> {
        self.records.clone()
    }

    pub fn delete(&mut self, id: &str) -> Result<()> {
        let before = self.records.len();
        self.records.retain(|record| record.id != id);
        if self.records.len() == before {
            return Err(Error::Backend(format!("No bookmark with id {}", id)));
        }
        Ok(())
    }
}

pub struct MemoryStorage {
    store: Arc<RwLock<MemoryStore>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            store: Arc::new(RwLock::new(MemoryStore::new())),
        }
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookmarkStore for MemoryStorage {
    async fn save(&self, draft: &BookmarkDraft) -> Result<()> {
        let mut store = self.store.write().await;
        store.save(draft);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<BookmarkRecord>> {
        let store = self.store.read().await;
        Ok(store.list())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let mut store = self.store.write().await;
        store.delete(id)
    }
}
