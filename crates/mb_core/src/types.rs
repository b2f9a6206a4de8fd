use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Shown in place of a field the backend omitted. The display layer never
/// renders an empty hole.
pub const NO_TITLE: &str = "No title";
pub const NO_SUMMARY: &str = "No summary available";
pub const NO_FULL_TEXT: &str = "No full text available";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    #[default]
    Article,
    List,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkEntry {
    pub title: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Page-head metadata the backend extracts alongside the content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageMetadata {
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub keywords: Option<String>,
}

/// The variant-specific part of a fetched page. Components branch on this
/// tag, never on raw optional-field presence.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentBody {
    Article { summary: String, full_text: String },
    List { links: Vec<LinkEntry> },
}

/// The result of the most recent successful fetch. Fully replaced on every
/// fetch; carries the submitted URL so save/export need no hidden state.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchedContent {
    pub url: String,
    pub title: String,
    pub body: ContentBody,
    pub metadata: Option<PageMetadata>,
}

impl FetchedContent {
    pub fn kind(&self) -> ContentKind {
        match self.body {
            ContentBody::Article { .. } => ContentKind::Article,
            ContentBody::List { .. } => ContentKind::List,
        }
    }
}

/// A bookmark as held by the remote store. Records written by older client
/// generations use `_id` and omit `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookmarkRecord {
    #[serde(alias = "_id")]
    pub id: String,
    pub url: String,
    pub title: String,
    #[serde(default)]
    pub kind: ContentKind,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<LinkEntry>,
    #[serde(default)]
    pub saved_at: Option<DateTime<Utc>>,
}

/// The save payload: everything the store needs to mint a record. Carries
/// only the field its kind populates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookmarkDraft {
    pub url: String,
    pub title: String,
    pub kind: ContentKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<LinkEntry>,
}

impl BookmarkDraft {
    pub fn from_content(content: &FetchedContent) -> Self {
        match &content.body {
            ContentBody::Article { summary, .. } => Self {
                url: content.url.clone(),
                title: content.title.clone(),
                kind: ContentKind::Article,
                summary: Some(summary.clone()),
                links: Vec::new(),
            },
            ContentBody::List { links } => Self {
                url: content.url.clone(),
                title: content.title.clone(),
                kind: ContentKind::List,
                summary: None,
                links: links.clone(),
            },
        }
    }
}
