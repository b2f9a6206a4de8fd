use mb_core::{BookmarkRecord, ContentBody, ContentKind, FetchedContent};

use crate::view::{ContentView, Rendered};

/// Render the content area. Pure: no network, no shared state. Action
/// visibility is a strict function of the fetch outcome — shown after any
/// successful render, hidden after an error.
pub fn render(view: &ContentView) -> Rendered {
    match view {
        ContentView::Content(content) => Rendered {
            body: render_content(content),
            actions_visible: true,
        },
        ContentView::Failed(message) => Rendered {
            body: format!("Error: {}", message),
            actions_visible: false,
        },
    }
}

fn render_content(content: &FetchedContent) -> String {
    let mut out = String::new();
    out.push_str(&content.title);
    out.push('\n');
    out.push_str(&format!("Source: {}\n", content.url));
    if let Some(metadata) = &content.metadata {
        if let Some(author) = &metadata.author {
            out.push_str(&format!("Author: {}\n", author));
        }
        if let Some(description) = &metadata.description {
            out.push_str(&format!("About: {}\n", description));
        }
    }
    match &content.body {
        ContentBody::Article { summary, full_text } => {
            out.push_str("\nSummary:\n");
            out.push_str(summary);
            out.push_str("\n\nFull Text:\n");
            out.push_str(full_text);
            out.push('\n');
        }
        ContentBody::List { links } => {
            out.push_str("\nLinks:\n");
            for (i, link) in links.iter().enumerate() {
                let thumb = match &link.image {
                    Some(image) => format!("[thumb {}]", image),
                    None => "[no thumbnail]".to_string(),
                };
                out.push_str(&format!("{:>3}. {} {} -> {}\n", i + 1, thumb, link.title, link.url));
            }
        }
    }
    out
}

/// Render the saved-bookmarks panel. The panel is rebuilt wholesale from
/// the store's list on every reload.
pub fn render_bookmarks(records: &[BookmarkRecord]) -> String {
    if records.is_empty() {
        return "No bookmarks saved yet.\n".to_string();
    }
    let mut out = String::new();
    for record in records {
        out.push_str(&format!("[{}] {}\n", record.id, record.title));
        out.push_str(&format!("      {}\n", record.url));
        match record.kind {
            ContentKind::Article => {
                if let Some(summary) = &record.summary {
                    out.push_str(&format!("      Summary: {}\n", summary));
                }
            }
            ContentKind::List => {
                for link in &record.links {
                    out.push_str(&format!("      - {}: {}\n", link.title, link.url));
                }
            }
        }
    }
    out
}
