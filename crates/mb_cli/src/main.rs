use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use mb_core::{ContentSource, Result};
use mb_fetch::HttpFetcher;
use mb_store::{create_store, BookmarkSync};

mod session;
use session::{Command, Session};

#[derive(Parser, Debug)]
#[command(author, version, about = "Mini bookmark client", long_about = None)]
pub struct Cli {
    /// Base URL of the scrape-and-bookmark backend
    #[arg(long, default_value = "http://localhost:5000")]
    backend_url: String,
    /// Bookmark store to use. Available: http (default), memory
    #[arg(long, default_value = "http")]
    store: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Fetch and display parsed content for a URL
    Fetch {
        url: String,
        /// Save the fetched content as a bookmark
        #[arg(long)]
        save: bool,
        /// Export the fetched content to a text file in the given directory
        #[arg(long, value_name = "DIR")]
        export: Option<PathBuf>,
    },
    /// Manage the saved bookmark list
    Bookmarks {
        #[command(subcommand)]
        command: BookmarkCommands,
    },
    /// Interactive session: fetch, save, export, list, delete
    Session,
}

#[derive(clap::Subcommand, Debug)]
enum BookmarkCommands {
    /// Show the full bookmark list
    List,
    /// Delete a bookmark by id, then show the refreshed list
    Delete { id: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let store = create_store(&cli.store, &cli.backend_url).await?;
    info!("📚 Bookmark store initialized (using {})", cli.store);

    let source: Arc<dyn ContentSource> = Arc::new(HttpFetcher::new(&cli.backend_url));
    let mut session = Session::new(source, BookmarkSync::new(store));

    match cli.command {
        Commands::Fetch { url, save, export } => {
            println!("{}", session.dispatch(Command::Fetch(url)).await?);
            if save {
                println!("{}", session.dispatch(Command::Save).await?);
            }
            if let Some(dir) = export {
                println!("{}", session.dispatch(Command::Export(Some(dir))).await?);
            }
        }
        Commands::Bookmarks { command } => match command {
            BookmarkCommands::List => {
                println!("{}", session.dispatch(Command::List).await?);
            }
            BookmarkCommands::Delete { id } => {
                println!("{}", session.dispatch(Command::Delete(id)).await?);
            }
        },
        Commands::Session => session.run().await?,
    }

    Ok(())
}
