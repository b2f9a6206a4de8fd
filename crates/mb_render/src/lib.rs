pub mod export;
pub mod renderer;
pub mod view;

pub use renderer::{render, render_bookmarks};
pub use view::{ContentView, Rendered};

pub mod prelude {
    pub use crate::export::{derive_filename, export_text, write_export};
    pub use crate::renderer::{render, render_bookmarks};
    pub use crate::view::{ContentView, Rendered};
    pub use mb_core::{FetchedContent, Result};
}
