use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, error, info};

use mb_core::{BookmarkDraft, BookmarkRecord, BookmarkStore, Error, Result};

/// The remote bookmark store, reached over the backend's REST endpoints.
/// The client holds no cache; callers reload the full list after every
/// confirmed mutation.
pub struct HttpStore {
    client: reqwest::Client,
    base_url: String,
}

/// Mutation reply across backend generations: the newer one reports
/// `{success: bool}`, the older one a bare `{message}`.
#[derive(Debug, Default, Deserialize)]
struct MutationReply {
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    message: Option<String>,
}

impl MutationReply {
    fn confirmed(&self) -> bool {
        match self.success {
            Some(ok) => ok,
            None => self.message.is_some(),
        }
    }
}

impl HttpStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn read_reply(response: reqwest::Response) -> Result<MutationReply> {
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            error!("Failed to parse store response: {}", e);
            error!("Raw response: {}", body);
            Error::InvalidResponse(e.to_string())
        })
    }
}

#[async_trait]
impl BookmarkStore for HttpStore {
    async fn save(&self, draft: &BookmarkDraft) -> Result<()> {
        info!("💾 Saving bookmark for {}", draft.url);
        let mut response = self
            .client
            .post(self.endpoint("/save_bookmark"))
            .json(draft)
            .send()
            .await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            // Older backends expose the same operation as /save
            debug!("/save_bookmark not found, retrying against /save");
            response = self
                .client
                .post(self.endpoint("/save"))
                .json(draft)
                .send()
                .await?;
        }
        let reply = Self::read_reply(response).await?;
        if !reply.confirmed() {
            return Err(Error::Backend("Failed to save bookmark".to_string()));
        }
        info!("✨ Bookmark saved for {}", draft.url);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<BookmarkRecord>> {
        let response = self.client.get(self.endpoint("/bookmarks")).send().await?;
        let body = response.text().await?;
        let records: Vec<BookmarkRecord> = serde_json::from_str(&body).map_err(|e| {
            error!("Failed to parse bookmark list: {}", e);
            error!("Raw response: {}", body);
            Error::InvalidResponse(e.to_string())
        })?;
        debug!("Loaded {} bookmarks", records.len());
        Ok(records)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        info!("🗑️ Deleting bookmark {}", id);
        let response = self
            .client
            .post(self.endpoint("/delete"))
            .json(&json!({ "id": id }))
            .send()
            .await?;
        let reply = Self::read_reply(response).await?;
        if !reply.confirmed() {
            return Err(Error::Backend(format!("Failed to delete bookmark {}", id)));
        }
        info!("✨ Bookmark {} deleted", id);
        Ok(())
    }
}
