/// Tenor service adapter
///
/// Talks to the Tenor v2 API over HTTPS and converts its wire shapes into
/// the domain types the rest of the app consumes:
/// - `client.rs` - HTTP client for the search and featured endpoints
/// - `types.rs` - serde wire types and their mapping to `GifImage`/`Page`

pub mod client;
pub mod types;

pub use client::{FetchError, TenorClient};
