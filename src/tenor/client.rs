/// HTTP client for the Tenor v2 API
///
/// Exposes the two endpoints the app consumes: `search` for a user-typed
/// term and `trending` (Tenor calls it "featured") for the default feed.
/// Both return one page of results plus an opaque cursor for the next.

use std::time::Duration;

use reqwest::Client;
use thiserror::Error;

use super::types::TenorResponse;
use crate::state::data::Page;

const BASE_URL: &str = "https://tenor.googleapis.com/v2";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors from the Tenor service adapter.
///
/// Variants carry rendered strings rather than source errors because they
/// travel inside `Clone`able UI messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(String),
    #[error("service returned HTTP {0}")]
    Status(u16),
    #[error("could not decode response: {0}")]
    Decode(String),
}

/// Client for the Tenor GIF service
#[derive(Clone)]
pub struct TenorClient {
    client: Client,
    api_key: String,
}

impl TenorClient {
    /// Create a client using the given Tenor API key
    pub fn new(api_key: String) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|err| FetchError::Http(err.to_string()))?;

        Ok(TenorClient { client, api_key })
    }

    /// Fetch one page of GIFs matching `term`
    pub async fn search(
        &self,
        term: &str,
        page_size: usize,
        pos: Option<&str>,
    ) -> Result<Page, FetchError> {
        let mut params = vec![
            ("key", self.api_key.clone()),
            ("q", term.to_owned()),
            ("limit", page_size.to_string()),
        ];
        if let Some(pos) = pos {
            params.push(("pos", pos.to_owned()));
        }

        self.get_page("search", &params).await
    }

    /// Fetch one page of the trending feed
    pub async fn trending(&self, page_size: usize, pos: Option<&str>) -> Result<Page, FetchError> {
        let mut params = vec![
            ("key", self.api_key.clone()),
            ("limit", page_size.to_string()),
        ];
        if let Some(pos) = pos {
            params.push(("pos", pos.to_owned()));
        }

        self.get_page("featured", &params).await
    }

    async fn get_page(&self, endpoint: &str, params: &[(&str, String)]) -> Result<Page, FetchError> {
        let url = format!("{BASE_URL}/{endpoint}");

        let response = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(|err| FetchError::Http(err.to_string()))?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status().as_u16()));
        }

        let body: TenorResponse = response
            .json()
            .await
            .map_err(|err| FetchError::Decode(err.to_string()))?;

        Ok(body.into_page())
    }
}
