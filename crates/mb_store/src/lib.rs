use std::sync::Arc;

use mb_core::{BookmarkStore, Error, Result};

pub mod backends;
pub mod sync;

pub use backends::{HttpStore, MemoryStorage};
pub use sync::BookmarkSync;

/// Select a store backend by name, as given on the command line.
pub async fn create_store(kind: &str, base_url: &str) -> Result<Arc<dyn BookmarkStore>> {
    match kind {
        "http" => Ok(Arc::new(HttpStore::new(base_url))),
        "memory" => Ok(Arc::new(MemoryStorage::new())),
        other => Err(Error::Backend(format!("Unknown store backend: {}", other))),
    }
}

pub mod prelude {
    pub use super::sync::BookmarkSync;
    pub use super::backends::{HttpStore, MemoryStorage};
    pub use mb_core::{BookmarkDraft, BookmarkRecord, BookmarkStore, Error, Result};
}
