pub mod error;
pub mod source;
pub mod store;
pub mod types;
pub mod wire;

pub use error::Error;
pub use source::ContentSource;
pub use store::BookmarkStore;
pub use types::{
    BookmarkDraft, BookmarkRecord, ContentBody, ContentKind, FetchedContent, LinkEntry,
    PageMetadata,
};

pub type Result<T> = std::result::Result<T, Error>;
