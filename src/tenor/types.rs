/// Wire types for the Tenor v2 API
///
/// Only the fields this app reads are modeled. Anything else in the
/// response body is ignored by serde.

use serde::Deserialize;

use crate::state::data::{GifImage, Page};

/// Top-level response shape shared by the search and featured endpoints
#[derive(Debug, Deserialize)]
pub struct TenorResponse {
    #[serde(default)]
    pub results: Vec<TenorResult>,
    /// Cursor for the next page; the service sends "" when exhausted
    #[serde(default)]
    pub next: String,
}

/// One GIF entry in a response
#[derive(Debug, Deserialize)]
pub struct TenorResult {
    pub id: String,
    #[serde(default)]
    pub content_description: String,
    #[serde(default)]
    pub media_formats: MediaFormats,
}

/// The renditions Tenor offers per GIF; the grid only uses the small one
#[derive(Debug, Default, Deserialize)]
pub struct MediaFormats {
    pub tinygif: Option<MediaFormat>,
}

/// A single rendition: where it lives and how big it is
#[derive(Debug, Deserialize)]
pub struct MediaFormat {
    pub url: String,
    /// [width, height] in pixels
    #[serde(default)]
    pub dims: Vec<u32>,
}

impl TenorResponse {
    /// Convert the wire shape into the domain page consumed by the feed
    pub fn into_page(self) -> Page {
        let images = self
            .results
            .into_iter()
            .filter_map(TenorResult::into_image)
            .collect();
        let next = if self.next.is_empty() {
            None
        } else {
            Some(self.next)
        };

        Page { images, next }
    }
}

impl TenorResult {
    /// Results without a tinygif rendition have nothing the grid can show
    /// and are skipped. Malformed `dims` become 0x0, which the layout
    /// treats as a zero-height contribution rather than an error.
    fn into_image(self) -> Option<GifImage> {
        let format = self.media_formats.tinygif?;
        let (width, height) = match format.dims.as_slice() {
            [width, height, ..] => (*width, *height),
            _ => (0, 0),
        };

        Some(GifImage {
            id: self.id,
            url: format.url,
            description: self.content_description,
            preview_width: width,
            preview_height: height,
        })
    }
}
