pub mod fetcher;

pub use fetcher::HttpFetcher;

pub mod prelude {
    pub use crate::HttpFetcher;
    pub use mb_core::{ContentSource, Error, FetchedContent, Result};
}
