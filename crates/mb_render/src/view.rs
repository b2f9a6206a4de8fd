use mb_core::FetchedContent;

/// What the content area shows: the outcome of the latest fetch. A new
/// fetch replaces the whole view, success or failure.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentView {
    Content(FetchedContent),
    Failed(String),
}

/// Display text plus the action-control state derived from it.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    pub body: String,
    pub actions_visible: bool,
}
