use std::path::PathBuf;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, warn};

use mb_core::{ContentSource, Error, FetchedContent, Result};
use mb_render::export::write_export;
use mb_render::{render, render_bookmarks, ContentView};
use mb_store::BookmarkSync;

const HELP: &str = "Commands:
  fetch <url>    fetch and display parsed content
  save           bookmark the displayed content
  export [dir]   write the displayed content to a text file
  list           reload and show the saved bookmarks
  delete <id>    delete a bookmark, then reload the list
  help           show this help
  quit           leave the session";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Fetch(String),
    Save,
    Export(Option<PathBuf>),
    List,
    Delete(String),
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Option<Command> {
        let mut parts = line.trim().splitn(2, char::is_whitespace);
        let head = parts.next()?;
        let rest = parts.next().map(str::trim).filter(|r| !r.is_empty());
        match (head, rest) {
            ("fetch", url) => Some(Command::Fetch(url.unwrap_or_default().to_string())),
            ("save", _) => Some(Command::Save),
            ("export", dir) => Some(Command::Export(dir.map(PathBuf::from))),
            ("list", _) => Some(Command::List),
            ("delete", Some(id)) => Some(Command::Delete(id.to_string())),
            ("help", _) => Some(Command::Help),
            ("quit" | "exit", _) => Some(Command::Quit),
            _ => None,
        }
    }
}

/// One interactive page: the current content view plus the saved panel.
/// Each command is a user action; operations are not serialized against
/// each other, so the last one to resolve owns the view.
pub struct Session {
    source: Arc<dyn ContentSource>,
    sync: BookmarkSync,
    view: Option<FetchedContent>,
    export_dir: PathBuf,
}

impl Session {
    pub fn new(source: Arc<dyn ContentSource>, sync: BookmarkSync) -> Self {
        Self {
            source,
            sync,
            view: None,
            export_dir: PathBuf::from("."),
        }
    }

    /// Load the saved panel, like the page does on load. A failure starts
    /// the session with an empty panel instead of aborting.
    pub async fn start(&mut self) -> String {
        if let Err(e) = self.sync.reload().await {
            warn!("Failed to load bookmarks: {}", e);
        }
        render_bookmarks(self.sync.records())
    }

    /// Run one user action. `Ok` carries display text; `Err` carries a
    /// blocking notification that leaves the current display untouched.
    pub async fn dispatch(&mut self, command: Command) -> Result<String> {
        match command {
            Command::Fetch(url) => self.fetch(&url).await,
            Command::Save => self.save().await,
            Command::Export(dir) => self.export(dir),
            Command::List => {
                self.sync.reload().await?;
                Ok(render_bookmarks(self.sync.records()))
            }
            Command::Delete(id) => {
                self.sync.delete(&id).await?;
                Ok(render_bookmarks(self.sync.records()))
            }
            Command::Help => Ok(HELP.to_string()),
            Command::Quit => Ok(String::new()),
        }
    }

    async fn fetch(&mut self, url: &str) -> Result<String> {
        if url.trim().is_empty() {
            return Err(Error::InvalidUrl("A URL is required".to_string()));
        }
        let view = match self.source.fetch(url).await {
            Ok(content) => {
                self.view = Some(content.clone());
                ContentView::Content(content)
            }
            // Validation failures are blocked before any request went out
            // and leave the current display alone
            Err(e @ Error::InvalidUrl(_)) => return Err(e),
            Err(e) => {
                error!("Fetch error: {}", e);
                self.view = None;
                ContentView::Failed(e.to_string())
            }
        };
        let rendered = render(&view);
        Ok(if rendered.actions_visible {
            format!("{}\nActions available: save, export\n", rendered.body)
        } else {
            rendered.body
        })
    }

    async fn save(&mut self) -> Result<String> {
        let content = self.view.as_ref().ok_or_else(|| {
            Error::Precondition("No content to save. Fetch a page first.".to_string())
        })?;
        self.sync.save(content).await?;
        Ok(format!(
            "Bookmark saved successfully!\n\n{}",
            render_bookmarks(self.sync.records())
        ))
    }

    fn export(&self, dir: Option<PathBuf>) -> Result<String> {
        let content = self.view.as_ref().ok_or_else(|| {
            Error::Precondition("No content to export. Fetch a page first.".to_string())
        })?;
        let dir = dir.unwrap_or_else(|| self.export_dir.clone());
        let path = write_export(content, &dir)?;
        Ok(format!("Exported to {}", path.display()))
    }

    /// The interactive loop: read a command, run it, print the outcome.
    pub async fn run(&mut self) -> Result<()> {
        println!("{}", self.start().await);
        println!("Type `help` for commands.");

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            prompt()?;
            let line = match lines.next_line().await? {
                Some(line) => line,
                None => break,
            };
            match Command::parse(&line) {
                None => println!("Unknown command. Type `help`."),
                Some(Command::Quit) => break,
                Some(command) => match self.dispatch(command).await {
                    Ok(text) => println!("{}", text),
                    Err(e) => eprintln!("⚠️  {}", e),
                },
            }
        }
        Ok(())
    }
}

fn prompt() -> Result<()> {
    use std::io::Write;
    print!("> ");
    std::io::stdout().flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mb_core::{BookmarkDraft, BookmarkRecord, BookmarkStore, ContentBody};
    use mb_store::MemoryStorage;
    use std::sync::atomic::{AtomicUsize, Ordering};

    enum StubOutcome {
        Content(FetchedContent),
        Fail(String),
    }

    struct StubSource {
        outcome: StubOutcome,
    }

    #[async_trait]
    impl ContentSource for StubSource {
        async fn fetch(&self, url: &str) -> Result<FetchedContent> {
            match &self.outcome {
                StubOutcome::Content(content) => Ok(FetchedContent {
                    url: url.to_string(),
                    ..content.clone()
                }),
                StubOutcome::Fail(message) => Err(Error::Backend(message.clone())),
            }
        }
    }

    #[derive(Default)]
    struct CountingStore {
        saves: AtomicUsize,
        lists: AtomicUsize,
    }

    #[async_trait]
    impl BookmarkStore for CountingStore {
        async fn save(&self, _draft: &BookmarkDraft) -> Result<()> {
            self.saves.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        async fn list(&self) -> Result<Vec<BookmarkRecord>> {
            self.lists.fetch_add(1, Ordering::SeqCst);
            Ok(Vec::new())
        }

        async fn delete(&self, _id: &str) -> Result<()> {
            Ok(())
        }
    }

    fn article_stub() -> Arc<StubSource> {
        Arc::new(StubSource {
            outcome: StubOutcome::Content(FetchedContent {
                url: String::new(),
                title: "A".to_string(),
                body: ContentBody::Article {
                    summary: "S".to_string(),
                    full_text: "No full text available".to_string(),
                },
                metadata: None,
            }),
        })
    }

    fn failing_stub(message: &str) -> Arc<StubSource> {
        Arc::new(StubSource {
            outcome: StubOutcome::Fail(message.to_string()),
        })
    }

    #[test]
    fn test_command_parsing() {
        assert_eq!(
            Command::parse("fetch https://example.com/a"),
            Some(Command::Fetch("https://example.com/a".to_string()))
        );
        assert_eq!(Command::parse("  save  "), Some(Command::Save));
        assert_eq!(Command::parse("export"), Some(Command::Export(None)));
        assert_eq!(
            Command::parse("delete abc"),
            Some(Command::Delete("abc".to_string()))
        );
        assert_eq!(Command::parse("exit"), Some(Command::Quit));
        assert_eq!(Command::parse("delete"), None);
        assert_eq!(Command::parse(""), None);
        assert_eq!(Command::parse("bogus"), None);
    }

    #[tokio::test]
    async fn test_fetch_then_save_refreshes_panel() {
        let store = Arc::new(MemoryStorage::new());
        let mut session = Session::new(article_stub(), BookmarkSync::new(store.clone()));

        let shown = session
            .dispatch(Command::Fetch("https://example.com/a".to_string()))
            .await
            .unwrap();
        assert!(shown.contains("A\n"));
        assert!(shown.contains("Summary:\nS"));
        assert!(shown.contains("Actions available"));

        let saved = session.dispatch(Command::Save).await.unwrap();
        assert!(saved.contains("Bookmark saved successfully!"));
        assert!(saved.contains("https://example.com/a"));

        // The panel equals exactly the store's list
        let stored = store.list().await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].title, "A");
    }

    #[tokio::test]
    async fn test_save_without_fetch_is_a_noop() {
        let store = Arc::new(CountingStore::default());
        let mut session = Session::new(article_stub(), BookmarkSync::new(store.clone()));

        let err = session.dispatch(Command::Save).await.unwrap_err();
        assert!(matches!(err, Error::Precondition(_)));
        // No save, and no list reload either
        assert_eq!(store.saves.load(Ordering::SeqCst), 0);
        assert_eq!(store.lists.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_fetch_error_replaces_view_and_hides_actions() {
        let store = Arc::new(MemoryStorage::new());
        let mut session = Session::new(failing_stub("fetch failed"), BookmarkSync::new(store));

        let shown = session
            .dispatch(Command::Fetch("https://example.com/a".to_string()))
            .await
            .unwrap();
        assert_eq!(shown, "Error: fetch failed");

        // The failed fetch cleared the view, so save is rejected
        let err = session.dispatch(Command::Save).await.unwrap_err();
        assert!(matches!(err, Error::Precondition(_)));
    }

    #[tokio::test]
    async fn test_empty_url_blocked_without_touching_view() {
        let store = Arc::new(MemoryStorage::new());
        let mut session = Session::new(article_stub(), BookmarkSync::new(store));

        session
            .dispatch(Command::Fetch("https://example.com/a".to_string()))
            .await
            .unwrap();

        let err = session
            .dispatch(Command::Fetch(String::new()))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidUrl(_)));

        // The previously fetched content is still saveable
        assert!(session.dispatch(Command::Save).await.is_ok());
    }

    #[tokio::test]
    async fn test_export_writes_file() {
        let store = Arc::new(MemoryStorage::new());
        let mut session = Session::new(article_stub(), BookmarkSync::new(store));
        let dir = tempfile::tempdir().unwrap();

        let err = session
            .dispatch(Command::Export(Some(dir.path().to_path_buf())))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Precondition(_)));

        session
            .dispatch(Command::Fetch("https://example.com/a".to_string()))
            .await
            .unwrap();
        let message = session
            .dispatch(Command::Export(Some(dir.path().to_path_buf())))
            .await
            .unwrap();
        assert!(message.contains("Exported to"));
        assert!(dir.path().join("a.txt").exists());
    }

    #[tokio::test]
    async fn test_delete_refreshes_panel() {
        let store = Arc::new(MemoryStorage::new());
        let mut session = Session::new(article_stub(), BookmarkSync::new(store.clone()));

        session
            .dispatch(Command::Fetch("https://example.com/a".to_string()))
            .await
            .unwrap();
        session.dispatch(Command::Save).await.unwrap();

        let id = store.list().await.unwrap()[0].id.clone();
        let panel = session.dispatch(Command::Delete(id)).await.unwrap();
        assert_eq!(panel, "No bookmarks saved yet.\n");
    }

    #[tokio::test]
    async fn test_start_loads_panel() {
        let store = Arc::new(MemoryStorage::new());
        store
            .save(&BookmarkDraft {
                url: "https://a.com".to_string(),
                title: "Existing".to_string(),
                kind: mb_core::ContentKind::Article,
                summary: None,
                links: Vec::new(),
            })
            .await
            .unwrap();

        let mut session = Session::new(article_stub(), BookmarkSync::new(store));
        let panel = session.start().await;
        assert!(panel.contains("Existing"));
    }
}
