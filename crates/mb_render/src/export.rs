use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::info;

use mb_core::{ContentBody, Error, FetchedContent, Result};

/// Used when the title has no characters a filename stem can keep.
pub const DEFAULT_FILENAME: &str = "bookmark.txt";

/// Compose the export body. Articles use the fixed template; lists replace
/// the summary section with their serialized links.
pub fn export_text(content: &FetchedContent) -> String {
    match &content.body {
        ContentBody::Article { summary, .. } => format!(
            "URL: {}\n\nTitle: {}\n\nSummary:\n{}",
            content.url, content.title, summary
        ),
        ContentBody::List { links } => {
            let mut body = format!(
                "URL: {}\n\nTitle: {}\n\nLinks:\n",
                content.url, content.title
            );
            for link in links {
                body.push_str(&format!("- {}: {}\n", link.title, link.url));
            }
            body
        }
    }
}

/// Derive the filename from the title: lowercase, one underscore per
/// character outside [a-z0-9], `.txt` appended. Titles that keep nothing
/// fall back to the default name.
pub fn derive_filename(title: &str) -> String {
    let lowered = title.to_lowercase();
    if !lowered.chars().any(|c| c.is_ascii_alphanumeric()) {
        return DEFAULT_FILENAME.to_string();
    }
    let stem: String = lowered
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    format!("{}.txt", stem)
}

/// Write the export into `dir`, entirely local. The temp file is the
/// transient resource: persisted to the final name on success, released
/// automatically on any failure.
pub fn write_export(content: &FetchedContent, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(derive_filename(&content.title));
    let body = export_text(content);

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(body.as_bytes())?;
    tmp.persist(&path)
        .map_err(|e| Error::Export(format!("Failed to write {}: {}", path.display(), e)))?;

    info!("📄 Exported \"{}\" to {}", content.title, path.display());
    Ok(path)
}
