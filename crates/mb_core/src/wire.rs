use serde::Deserialize;
use tracing::error;

use crate::types::{
    ContentBody, FetchedContent, LinkEntry, PageMetadata, NO_FULL_TEXT, NO_SUMMARY, NO_TITLE,
};
use crate::{Error, Result};

/// Superset of every response shape the fetch endpoint has produced across
/// backend generations: the flat article shape, the discriminated
/// article/list shape, and the error shape. Field aliases cover the older
/// names (`content_type`, `main_content`, link `text`).
#[derive(Debug, Default, Deserialize)]
pub struct RawFetchResponse {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default, rename = "type", alias = "content_type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default, alias = "main_content")]
    pub full_text: Option<String>,
    #[serde(default)]
    pub links: Option<Vec<RawLink>>,
    #[serde(default)]
    pub metadata: Option<RawMetadata>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawLink {
    #[serde(default, alias = "text")]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl RawLink {
    /// An entry without a target cannot be rendered as a link.
    fn into_entry(self) -> Option<LinkEntry> {
        let url = self.url.filter(|u| !u.trim().is_empty())?;
        Some(LinkEntry {
            title: fill(self.title, NO_TITLE),
            url,
            image: self.image.filter(|i| !i.trim().is_empty()),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct RawMetadata {
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub keywords: Option<String>,
}

impl RawMetadata {
    fn into_metadata(self) -> Option<PageMetadata> {
        // The backend sends empty strings for fields it could not extract
        let author = self.author.filter(|s| !s.trim().is_empty());
        let description = self.description.filter(|s| !s.trim().is_empty());
        let keywords = self.keywords.filter(|s| !s.trim().is_empty());
        if author.is_none() && description.is_none() && keywords.is_none() {
            return None;
        }
        Some(PageMetadata {
            author,
            description,
            keywords,
        })
    }
}

fn fill(value: Option<String>, placeholder: &str) -> String {
    match value {
        Some(s) if !s.trim().is_empty() => s,
        _ => placeholder.to_string(),
    }
}

/// Decode a fetch response body. The raw body is logged before the generic
/// error is surfaced so malformed responses stay diagnosable.
pub fn parse_body(body: &str) -> Result<RawFetchResponse> {
    serde_json::from_str(body).map_err(|e| {
        error!("Failed to parse fetch response: {}", e);
        error!("Raw response: {}", body);
        Error::InvalidResponse(e.to_string())
    })
}

/// Turn a decoded response into the display model. An `error` field wins
/// regardless of HTTP status; a missing or unrecognized `type` (the backend
/// classifier also emits labels like "news" and "blog") renders as an
/// article so the display never goes blank.
pub fn normalize(raw: RawFetchResponse, submitted_url: &str) -> Result<FetchedContent> {
    if let Some(message) = raw.error {
        return Err(Error::Backend(message));
    }

    let body = match raw.kind.as_deref() {
        Some(kind) if kind.eq_ignore_ascii_case("list") => ContentBody::List {
            links: raw
                .links
                .unwrap_or_default()
                .into_iter()
                .filter_map(RawLink::into_entry)
                .collect(),
        },
        _ => ContentBody::Article {
            summary: fill(raw.summary, NO_SUMMARY),
            full_text: fill(raw.full_text, NO_FULL_TEXT),
        },
    };

    Ok(FetchedContent {
        url: submitted_url.to_string(),
        title: fill(raw.title, NO_TITLE),
        body,
        metadata: raw.metadata.and_then(RawMetadata::into_metadata),
    })
}
