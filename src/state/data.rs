/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the Tenor service adapter, the feed coordinator, and the UI layer.

/// Represents a single GIF returned by the service
#[derive(Debug, Clone, PartialEq)]
pub struct GifImage {
    /// Unique identifier, stable across pages of one query
    pub id: String,
    /// URL of the preview-sized GIF asset
    pub url: String,
    /// Human-readable content description
    pub description: String,
    /// Preview width in pixels, as reported by the service
    pub preview_width: u32,
    /// Preview height in pixels, as reported by the service
    pub preview_height: u32,
}

/// One page of results from the service
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub images: Vec<GifImage>,
    /// Pagination token for the next page; `None` means the feed is exhausted
    pub next: Option<String>,
}

/// The key identifying what a query session is fetching
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// The trending feed (no user-typed term)
    Trending,
    /// A user-typed search term
    Search(String),
}

impl Query {
    /// The user-typed term for search sessions, `None` for trending
    pub fn search_term(&self) -> Option<&str> {
        match self {
            Query::Search(term) => Some(term),
            Query::Trending => None,
        }
    }
}
